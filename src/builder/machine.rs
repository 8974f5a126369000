//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::machine::{EndpointPolicy, MachineConfig, StateMachine, Transition};

/// Builder for constructing state machines with a fluent API.
///
/// States are registered in the order they are added, so the first call to
/// [`state`](StateMachineBuilder::state) gets `StateId::new(0)` and becomes
/// the initial state.
pub struct StateMachineBuilder<C> {
    context: Option<C>,
    config: MachineConfig,
    states: Vec<Box<dyn State<C>>>,
    transitions: Vec<Box<dyn Transition<C>>>,
}

impl<C: 'static> StateMachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            context: None,
            config: MachineConfig::default(),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the context the machine will own (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn endpoint_policy(mut self, policy: EndpointPolicy) -> Self {
        self.config.endpoint_policy = policy;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Add a state. The first one added is the initial state.
    pub fn state<S>(mut self, state: S) -> Self
    where
        S: State<C> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add a transition. Endpoints are checked against the configured policy
    /// once every state is registered, at build time.
    pub fn transition<T>(mut self, transition: T) -> Self
    where
        T: Transition<C> + 'static,
    {
        self.transitions.push(Box::new(transition));
        self
    }

    /// Build the state machine.
    /// Returns an error if the context is missing or a transition violates
    /// the endpoint policy.
    pub fn build(self) -> Result<StateMachine<C>, BuildError> {
        let context = self.context.ok_or(BuildError::MissingContext)?;

        let mut machine = StateMachine::with_config(context, self.config);
        for state in self.states {
            machine.add_boxed_state(state);
        }
        for transition in self.transitions {
            machine.add_boxed_transition(transition)?;
        }

        Ok(machine)
    }
}

impl<C: 'static> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GenericState, StateId};
    use crate::machine::{FnTransition, MachineError};

    #[test]
    fn builder_requires_context() {
        let result = StateMachineBuilder::<i32>::new().build();
        assert!(matches!(result, Err(BuildError::MissingContext)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .context(0)
            .state(GenericState::new("A", |c: &mut i32| *c += 1))
            .state(GenericState::new("B", |c: &mut i32| *c -= 1))
            .transition(FnTransition::new(StateId::new(0), StateId::new(1), |c: &i32| {
                *c > 1
            }))
            .build();

        assert!(machine.is_ok());
        let mut machine = machine.unwrap();
        assert_eq!(machine.active_state(), Some(StateId::new(0)));
        assert_eq!(machine.state_name(StateId::new(1)), Some("B"));

        machine.update();
        machine.update();
        assert_eq!(machine.active_state(), Some(StateId::new(1)));
    }

    #[test]
    fn strict_policy_checks_after_all_states() {
        let machine = StateMachineBuilder::new()
            .context(())
            .endpoint_policy(EndpointPolicy::Strict)
            .transition(FnTransition::new(StateId::new(0), StateId::new(1), |_: &()| true))
            .state(|_: &mut ()| {})
            .state(|_: &mut ()| {})
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn strict_policy_surfaces_machine_error() {
        let result = StateMachineBuilder::new()
            .context(())
            .endpoint_policy(EndpointPolicy::Strict)
            .state(|_: &mut ()| {})
            .transition(FnTransition::new(StateId::new(0), StateId::new(4), |_: &()| true))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Machine(MachineError::UnregisteredEndpoint { .. }))
        ));
    }

    #[test]
    fn config_is_applied() {
        let machine = StateMachineBuilder::new()
            .context(())
            .config(MachineConfig::strict())
            .history_limit(5)
            .build()
            .unwrap();

        assert_eq!(machine.config().endpoint_policy, EndpointPolicy::Strict);
        assert_eq!(machine.history().limit(), 5);
    }
}
