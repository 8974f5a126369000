//! The engine: transitions and the machine that drives them.
//!
//! # Key Concepts
//!
//! - **Transitions**: edges between states, guarded by a pure predicate,
//!   with an optional side effect when taken
//! - **State Machine**: owns states, transitions and the context; advances
//!   one state per [`StateMachine::update`]
//! - **Configuration**: endpoint validation policy and history retention
//!
//! # Example
//!
//! ```rust
//! use tickstate::core::{Comparison, GenericState};
//! use tickstate::machine::{GenericTransition, StateMachine};
//!
//! let mut machine = StateMachine::new(0);
//! let a = machine.add_state(GenericState::new("A", |c: &mut i32| *c += 1));
//! let b = machine.add_state(GenericState::new("B", |c: &mut i32| *c -= 1));
//!
//! machine
//!     .add_transition(GenericTransition::new(a, b, Comparison::GreaterThan, |c: &i32| *c, 10))
//!     .unwrap();
//! machine
//!     .add_transition(GenericTransition::new(b, a, Comparison::Equals, |c: &i32| *c, 0))
//!     .unwrap();
//!
//! for _ in 0..11 {
//!     machine.update();
//! }
//! assert_eq!(machine.active_state(), Some(b));
//! assert_eq!(*machine.context(), 11);
//! ```

mod config;
mod error;
#[allow(clippy::module_inception)]
mod machine;
mod transition;

pub use config::{EndpointPolicy, MachineConfig};
pub use error::{Endpoint, MachineError};
pub use machine::StateMachine;
pub use transition::{
    FnTransition, GenericTransition, Probe, Transition, TransitionAction, TransitionGuard,
};
