//! Errors raised while wiring a machine.

use crate::core::StateId;
use std::fmt;
use thiserror::Error;

/// Which end of a transition an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Errors that can occur when configuring a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Transition {endpoint} state {state} is not registered")]
    UnregisteredEndpoint { endpoint: Endpoint, state: StateId },
}
