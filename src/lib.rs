//! Tickstate: a deterministic, tick-driven finite state machine engine
//!
//! Tickstate drives time-sliced behavior for an external controller such as
//! an AI agent, a game-mode sequencer or a test harness. The host calls
//! [`StateMachine::update`] once per frame; each call runs the active state's
//! behavior and then fires at most one outgoing transition.
//!
//! # Core Concepts
//!
//! - **State**: an opaque unit of per-tick behavior via the `State` trait
//! - **Transition**: a guarded edge between two states, with an optional
//!   side effect when taken
//! - **StateMachine**: owns states, transitions and the shared context
//! - **Validation**: an optional audit of how the graph is wired
//!
//! # Example
//!
//! ```rust
//! use tickstate::{Comparison, GenericState, GenericTransition, StateMachine};
//!
//! let mut machine = StateMachine::new(0);
//! let a = machine.add_state(GenericState::new("A", |c: &mut i32| *c += 1));
//! let b = machine.add_state(GenericState::new("B", |c: &mut i32| *c -= 1));
//!
//! // A -> B once the counter passes 10, B -> A once it is back to 0
//! machine
//!     .add_transition(GenericTransition::new(a, b, Comparison::GreaterThan, |c: &i32| *c, 10))
//!     .unwrap();
//! machine
//!     .add_transition(GenericTransition::new(b, a, Comparison::Equals, |c: &i32| *c, 0))
//!     .unwrap();
//!
//! for _ in 0..22 {
//!     machine.update();
//! }
//!
//! assert_eq!(machine.active_state(), Some(a));
//! assert_eq!(machine.source_state(), Some(b));
//! assert_eq!(machine.destination_state(), Some(a));
//! assert_eq!(*machine.context(), 0);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Comparison, GenericState, State, StateId};
pub use crate::machine::{
    EndpointPolicy, FnTransition, GenericTransition, MachineConfig, MachineError, StateMachine,
    Transition,
};
