//! Leaf building blocks of the engine.
//!
//! This module contains the pieces that know nothing about the machine:
//! - State identity and the `State` behavior capability
//! - Comparison operators used by value-driven transitions
//! - The bounded transition history

mod compare;
mod history;
mod state;

pub use compare::Comparison;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::{GenericState, State, StateFunc, StateId};
