//! Build errors for machine and transition builders.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Machine context not specified. Call .context(value) before .build()")]
    MissingContext,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingSource,

    #[error("Transition destination state not specified. Call .to(state)")]
    MissingDestination,

    #[error("Transition predicate not specified. Call .when(predicate) or .always()")]
    MissingPredicate,

    #[error(transparent)]
    Machine(#[from] MachineError),
}
