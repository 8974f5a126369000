//! Configuration violations found by a graph audit.

use crate::core::StateId;
use thiserror::Error;

/// A problem in how states and transitions are wired together.
///
/// None of these stop a machine from running; they describe edges or states
/// that can never take part in it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Transition {from} -> {to} leaves unregistered state {from}")]
    UnregisteredSource { from: StateId, to: StateId },

    #[error("Transition {from} -> {to} enters unregistered state {to}")]
    UnregisteredDestination { from: StateId, to: StateId },

    #[error("State '{name}' ({state}) is unreachable from the initial state")]
    UnreachableState { state: StateId, name: String },
}
