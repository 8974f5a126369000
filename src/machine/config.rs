//! Machine configuration.

use serde::{Deserialize, Serialize};

/// How [`StateMachine::add_transition`] treats endpoints that are not yet
/// registered.
///
/// [`StateMachine::add_transition`]: crate::machine::StateMachine::add_transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Accept any endpoint. Edges touching unregistered states stay inert
    /// until those states are registered.
    #[default]
    Permissive,

    /// Reject a transition unless both endpoints are already registered.
    Strict,
}

/// Tunables for a [`StateMachine`](crate::machine::StateMachine).
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub endpoint_policy: EndpointPolicy,

    /// Number of fired transitions to retain. `0` disables the log.
    pub history_limit: usize,
}

impl MachineConfig {
    pub fn strict() -> Self {
        Self {
            endpoint_policy: EndpointPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_history(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
