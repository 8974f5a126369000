//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Comparison, StateId};
use crate::machine::{FnTransition, TransitionAction, TransitionGuard};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<C> {
    from: Option<StateId>,
    to: Option<StateId>,
    guard: Option<TransitionGuard<C>>,
    action: Option<TransitionAction<C>>,
}

impl<C: 'static> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: StateId) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: StateId) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the predicate (required).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.guard = Some(Box::new(predicate));
        self
    }

    /// Fire when `compare(probe(context), comparand)` holds.
    pub fn when_compare<A, B, F>(self, comparison: Comparison, probe: F, comparand: B) -> Self
    where
        A: PartialOrd<B>,
        B: 'static,
        F: Fn(&C) -> A + 'static,
    {
        self.when(move |context| comparison.compare(&probe(context), &comparand))
    }

    /// Fire unconditionally on the first tick the source is active.
    pub fn always(self) -> Self {
        self.when(|_| true)
    }

    /// Run `action` when the transition is taken (optional).
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<FnTransition<C>, BuildError> {
        let source = self.from.ok_or(BuildError::MissingSource)?;
        let destination = self.to.ok_or(BuildError::MissingDestination)?;
        let guard = self.guard.ok_or(BuildError::MissingPredicate)?;

        Ok(FnTransition {
            source,
            destination,
            guard,
            action: self.action,
        })
    }
}

impl<C: 'static> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
