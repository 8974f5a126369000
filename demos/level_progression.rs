//! Level Progression
//!
//! A game-mode sequencer alternating between two golf courses. The host
//! loop owns the frame cadence, calls `update()` once per frame and reloads
//! the world whenever the machine reports a newly entered level.
//!
//! Key concepts:
//! - Context struct shared by states and predicates
//! - Builder API with strict endpoint checking
//! - Transition actions for one-off effects
//! - Inspecting `destination_state()` from the driver loop
//!
//! Run with: cargo run --example level_progression

use tickstate::builder::{StateMachineBuilder, TransitionBuilder};
use tickstate::{EndpointPolicy, StateId};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Course {
    frame: u32,
    strokes: u32,
    reached_goal: bool,
    holes_completed: u32,
}

fn play(course: &mut Course) {
    course.frame += 1;
    // Every fifth frame the ball drops in
    if course.frame % 5 == 0 {
        course.strokes += 1;
        course.reached_goal = true;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let stage1 = StateId::new(0);
    let stage2 = StateId::new(1);

    let mut machine = StateMachineBuilder::new()
        .context(Course::default())
        .endpoint_policy(EndpointPolicy::Strict)
        .history_limit(8)
        .state(play)
        .state(play)
        .transition(
            TransitionBuilder::new()
                .from(stage1)
                .to(stage2)
                .when(|c: &Course| c.reached_goal)
                .then(|c: &mut Course| {
                    c.reached_goal = false;
                    c.holes_completed += 1;
                })
                .build()?,
        )
        .transition(
            TransitionBuilder::new()
                .from(stage2)
                .to(stage1)
                .when(|c: &Course| c.reached_goal)
                .then(|c: &mut Course| {
                    c.reached_goal = false;
                    c.holes_completed += 1;
                })
                .build()?,
        )
        .build()?;

    if let stillwater::validation::Validation::Failure(errors) = machine.validate() {
        for error in errors.iter() {
            tracing::warn!("{error}");
        }
    }

    let mut last_seen = None;
    for _ in 0..30 {
        machine.update();
        if machine.destination_state() != last_seen {
            last_seen = machine.destination_state();
            let level = if last_seen == Some(stage2) { 2 } else { 1 };
            tracing::info!(frame = machine.context().frame, level, "loading level");
        }
    }

    let course = machine.into_context();
    println!("Holes completed: {}", course.holes_completed);
    println!("Strokes taken:   {}", course.strokes);
    Ok(())
}
