//! Counter Cycle
//!
//! Two states sharing a counter: A counts up, B counts down. The machine
//! swaps to B once the counter passes 10 and back to A once it hits 0.
//!
//! Key concepts:
//! - Implicit initial state (first registered)
//! - Value-driven transitions with `GenericTransition`
//! - One state behavior and at most one transition per tick
//!
//! Run with: RUST_LOG=tickstate=debug cargo run --example counter_cycle

use tickstate::{Comparison, GenericState, GenericTransition, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Counter Cycle ===\n");

    let mut machine = StateMachine::new(0);
    let a = machine.add_state(GenericState::new("A", |c: &mut i32| {
        *c += 1;
        println!("In State A! counter = {c}");
    }));
    let b = machine.add_state(GenericState::new("B", |c: &mut i32| {
        *c -= 1;
        println!("In State B! counter = {c}");
    }));

    // A -> B when counter > 10, B -> A when counter == 0
    machine
        .add_transition(GenericTransition::new(a, b, Comparison::GreaterThan, |c: &i32| *c, 10))
        .expect("permissive machines accept every transition");
    machine
        .add_transition(GenericTransition::new(b, a, Comparison::Equals, |c: &i32| *c, 0))
        .expect("permissive machines accept every transition");

    for _ in 0..100 {
        machine.update();
    }

    println!();
    println!("Ticks run:        {}", machine.ticks());
    let active = machine.active_state().and_then(|s| machine.state_name(s));
    println!("Active state:     {active:?}");
    println!(
        "Last transition:  {:?} -> {:?}",
        machine.source_state(),
        machine.destination_state()
    );

    println!("\n=== Example Complete ===");
}
