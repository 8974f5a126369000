//! Whole-graph audit of a machine's configuration.
//!
//! The machine itself never rejects a transition unless it runs under
//! [`EndpointPolicy::Strict`](crate::machine::EndpointPolicy::Strict). This
//! module lets a host check a permissive machine before driving it, using
//! Stillwater's `Validation` to report every violation in one pass rather
//! than stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use tickstate::core::StateId;
//! use tickstate::machine::{FnTransition, StateMachine};
//! use tickstate::validation::ConfigViolation;
//! use stillwater::validation::Validation;
//!
//! let mut machine = StateMachine::new(());
//! let a = machine.add_state(|_: &mut ()| {});
//! let _orphan = machine.add_state(|_: &mut ()| {});
//! machine
//!     .add_transition(FnTransition::new(a, StateId::new(9), |_: &()| false))
//!     .unwrap();
//!
//! match machine.validate() {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.len(), 2);
//!         assert!(errors
//!             .iter()
//!             .any(|e| matches!(e, ConfigViolation::UnreachableState { .. })));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{AuditResult, MachineGraph};
pub use violations::ConfigViolation;

use crate::machine::StateMachine;
use stillwater::validation::Validation;

/// Run every audit rule against `machine`, accumulating all violations.
pub fn validate<C>(machine: &StateMachine<C>) -> AuditResult {
    let graph = MachineGraph::of(machine);
    let checks = vec![
        rules::registered_endpoints(&graph),
        rules::reachable_states(&graph),
    ];
    let result = Validation::all_vec(checks).map(|_| ());
    if result.is_failure() {
        tracing::debug!(states = graph.names.len(), "machine configuration has violations");
    }
    result
}

impl<C> StateMachine<C> {
    /// Audit the transition graph. See [`validate`].
    pub fn validate(&self) -> AuditResult {
        validate(self)
    }
}
