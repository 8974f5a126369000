//! The tick-driven state machine.

use crate::core::{State, StateId, TransitionHistory, TransitionRecord};
use crate::machine::config::{EndpointPolicy, MachineConfig};
use crate::machine::error::{Endpoint, MachineError};
use crate::machine::transition::Transition;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;

/// Finite state machine advancing exactly one state per tick.
///
/// The machine owns its states, its transitions and a context value `C`
/// that states mutate and transition predicates read. The first state ever
/// registered becomes the active state.
///
/// Each [`update`](StateMachine::update) runs the active state's behavior,
/// then evaluates the transitions leaving the active state in registration
/// order and takes the first one whose predicate holds. At most one
/// transition fires per tick; the newly entered state first runs on the
/// following tick.
pub struct StateMachine<C> {
    context: C,
    states: Vec<Box<dyn State<C>>>,
    transitions: HashMap<StateId, Vec<Box<dyn Transition<C>>>>,
    transition_count: usize,
    active: Option<StateId>,
    source: Option<StateId>,
    destination: Option<StateId>,
    ticks: u64,
    history: TransitionHistory,
    config: MachineConfig,
}

impl<C> StateMachine<C> {
    /// Create an idle machine owning `context`.
    pub fn new(context: C) -> Self {
        Self::with_config(context, MachineConfig::default())
    }

    pub fn with_config(context: C, config: MachineConfig) -> Self {
        Self {
            context,
            states: Vec::new(),
            transitions: HashMap::new(),
            transition_count: 0,
            active: None,
            source: None,
            destination: None,
            ticks: 0,
            history: TransitionHistory::with_limit(config.history_limit),
            config,
        }
    }

    /// Register a state and return its id.
    ///
    /// The first state registered becomes the active state.
    pub fn add_state<S>(&mut self, state: S) -> StateId
    where
        S: State<C> + 'static,
    {
        self.add_boxed_state(Box::new(state))
    }

    pub(crate) fn add_boxed_state(&mut self, state: Box<dyn State<C>>) -> StateId {
        let id = StateId::new(self.states.len());
        tracing::debug!(state = %id, name = state.name(), "registered state");
        self.states.push(state);
        if self.active.is_none() {
            self.active = Some(id);
            tracing::debug!(state = %id, "initial state set");
        }
        id
    }

    /// Register a transition at the end of its source state's bucket.
    ///
    /// Under [`EndpointPolicy::Permissive`] this never fails; an edge whose
    /// source is never active is simply inert. Under
    /// [`EndpointPolicy::Strict`] both endpoints must already be registered.
    pub fn add_transition<T>(&mut self, transition: T) -> Result<(), MachineError>
    where
        T: Transition<C> + 'static,
    {
        self.add_boxed_transition(Box::new(transition))
    }

    pub(crate) fn add_boxed_transition(
        &mut self,
        transition: Box<dyn Transition<C>>,
    ) -> Result<(), MachineError> {
        let source = transition.source();
        let destination = transition.destination();

        if self.config.endpoint_policy == EndpointPolicy::Strict {
            self.ensure_registered(Endpoint::Source, source)?;
            self.ensure_registered(Endpoint::Destination, destination)?;
        }

        tracing::debug!(%source, %destination, "registered transition");
        self.transitions
            .entry(source)
            .or_default()
            .push(transition);
        self.transition_count += 1;
        Ok(())
    }

    fn ensure_registered(&self, endpoint: Endpoint, state: StateId) -> Result<(), MachineError> {
        if self.is_registered(state) {
            Ok(())
        } else {
            Err(MachineError::UnregisteredEndpoint { endpoint, state })
        }
    }

    /// Advance one tick.
    ///
    /// Does nothing while no state is registered. Panics raised by state
    /// behavior or transition predicates propagate to the caller.
    pub fn update(&mut self) {
        self.ticks += 1;

        let Some(active) = self.active else {
            tracing::trace!(tick = self.ticks, "idle");
            return;
        };

        tracing::trace!(tick = self.ticks, state = %active, "tick");
        match self.states.get_mut(active.index()) {
            Some(state) => state.update(&mut self.context),
            None => tracing::trace!(state = %active, "unregistered state, skipping behavior"),
        }

        let Some(bucket) = self.transitions.get_mut(&active) else {
            return;
        };
        let context = &mut self.context;
        let Some(transition) = bucket.iter_mut().find(|t| t.can_transition(context)) else {
            return;
        };

        transition.on_transition(context);
        let destination = transition.destination();

        self.source = Some(active);
        self.destination = Some(destination);
        self.active = Some(destination);
        if self.history.is_enabled() {
            self.history.record(TransitionRecord {
                tick: self.ticks,
                from: active,
                to: destination,
                at: Utc::now(),
            });
        }
        tracing::debug!(
            tick = self.ticks,
            from = %active,
            to = %destination,
            "transition fired"
        );
        if !self.is_registered(destination) {
            tracing::warn!(
                state = %destination,
                "entered unregistered state, its behavior will be skipped"
            );
        }
    }

    /// The state whose behavior runs on the next tick.
    pub fn active_state(&self) -> Option<StateId> {
        self.active
    }

    /// Source of the most recently fired transition.
    pub fn source_state(&self) -> Option<StateId> {
        self.source
    }

    /// Destination of the most recently fired transition.
    pub fn destination_state(&self) -> Option<StateId> {
        self.destination
    }

    /// True until the first state is registered.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Number of `update` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_registered(&self, state: StateId) -> bool {
        state.index() < self.states.len()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }

    /// Number of transitions leaving `state`.
    pub fn transitions_from(&self, state: StateId) -> usize {
        self.transitions.get(&state).map_or(0, Vec::len)
    }

    /// Name of a registered state.
    pub fn state_name(&self, state: StateId) -> Option<&str> {
        self.states.get(state.index()).map(|s| s.name())
    }

    /// `(source, destination)` of every registered transition, grouped by
    /// source in ascending id order, registration order within a group.
    pub fn edges(&self) -> Vec<(StateId, StateId)> {
        let mut sources: Vec<&StateId> = self.transitions.keys().collect();
        sources.sort();
        sources
            .into_iter()
            .flat_map(|source| {
                self.transitions[source]
                    .iter()
                    .map(|t| (t.source(), t.destination()))
            })
            .collect()
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Consume the machine, dropping every state and transition, and return
    /// the context.
    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C: Default> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.states.iter().map(|s| s.name()).collect();
        f.debug_struct("StateMachine")
            .field("context", &self.context)
            .field("states", &names)
            .field("transitions", &self.transition_count)
            .field("active", &self.active)
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("ticks", &self.ticks)
            .finish()
    }
}
