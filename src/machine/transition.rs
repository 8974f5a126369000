//! Guarded edges between states.

use crate::core::{Comparison, StateId};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A directed edge from [`source`](Transition::source) to
/// [`destination`](Transition::destination), guarded by a predicate.
///
/// `can_transition` only receives a shared borrow of the context, so it
/// cannot mutate it; effects belong in `on_transition`, which runs once when
/// the edge is taken and before the destination becomes active.
pub trait Transition<C> {
    fn source(&self) -> StateId;

    fn destination(&self) -> StateId;

    /// Whether the edge should be taken on this tick.
    fn can_transition(&self, context: &C) -> bool;

    /// Side effect run when the edge is taken. Default is a no-op.
    fn on_transition(&mut self, _context: &mut C) {}
}

/// Live binding from the context to the value a [`GenericTransition`] tests.
pub type Probe<C, A> = Box<dyn Fn(&C) -> A>;

/// Transition firing when `compare(live value, comparand)` holds.
///
/// The live value is read through a probe at evaluation time, never
/// snapshotted, so the predicate always reflects the current value.
/// `on_transition` is a no-op.
pub struct GenericTransition<C, A, B> {
    source: StateId,
    destination: StateId,
    comparison: Comparison,
    probe: Probe<C, A>,
    comparand: B,
}

impl<C, A, B> GenericTransition<C, A, B>
where
    A: PartialOrd<B>,
{
    /// Compare a value read from the machine context against `comparand`.
    pub fn new<F>(
        source: StateId,
        destination: StateId,
        comparison: Comparison,
        probe: F,
        comparand: B,
    ) -> Self
    where
        F: Fn(&C) -> A + 'static,
    {
        Self {
            source,
            destination,
            comparison,
            probe: Box::new(probe),
            comparand,
        }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn comparand(&self) -> &B {
        &self.comparand
    }
}

impl<C, A, B> GenericTransition<C, A, B>
where
    A: PartialOrd<B> + Copy + 'static,
{
    /// Compare a value held in a shared cell against `comparand`.
    ///
    /// Useful when the watched value lives outside the machine context.
    pub fn watching(
        source: StateId,
        destination: StateId,
        comparison: Comparison,
        cell: Rc<Cell<A>>,
        comparand: B,
    ) -> Self {
        Self::new(source, destination, comparison, move |_: &C| cell.get(), comparand)
    }
}

impl<C, A, B> Transition<C> for GenericTransition<C, A, B>
where
    A: PartialOrd<B>,
{
    fn source(&self) -> StateId {
        self.source
    }

    fn destination(&self) -> StateId {
        self.destination
    }

    fn can_transition(&self, context: &C) -> bool {
        let live = (self.probe)(context);
        self.comparison.compare(&live, &self.comparand)
    }
}

impl<C, A, B: fmt::Debug> fmt::Debug for GenericTransition<C, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericTransition")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("comparison", &self.comparison)
            .field("comparand", &self.comparand)
            .finish_non_exhaustive()
    }
}

/// Boxed predicate stored by [`FnTransition`].
pub type TransitionGuard<C> = Box<dyn Fn(&C) -> bool>;

/// Boxed side effect stored by [`FnTransition`].
pub type TransitionAction<C> = Box<dyn FnMut(&mut C)>;

/// Transition backed by an arbitrary predicate and an optional action.
///
/// Usually built with [`TransitionBuilder`](crate::builder::TransitionBuilder).
pub struct FnTransition<C> {
    pub(crate) source: StateId,
    pub(crate) destination: StateId,
    pub(crate) guard: TransitionGuard<C>,
    pub(crate) action: Option<TransitionAction<C>>,
}

impl<C> FnTransition<C> {
    pub fn new<F>(source: StateId, destination: StateId, guard: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Self {
            source,
            destination,
            guard: Box::new(guard),
            action: None,
        }
    }

    /// Attach a side effect run when the transition is taken.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }
}

impl<C> Transition<C> for FnTransition<C> {
    fn source(&self) -> StateId {
        self.source
    }

    fn destination(&self) -> StateId {
        self.destination
    }

    fn can_transition(&self, context: &C) -> bool {
        (self.guard)(context)
    }

    fn on_transition(&mut self, context: &mut C) {
        if let Some(action) = self.action.as_mut() {
            action(context);
        }
    }
}

impl<C> fmt::Debug for FnTransition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransition")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .field("has_action", &self.action.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: StateId = StateId::new(0);
    const B: StateId = StateId::new(1);

    #[test]
    fn generic_transition_reports_endpoints() {
        let t: GenericTransition<i32, i32, i32> =
            GenericTransition::new(A, B, Comparison::GreaterThan, |c: &i32| *c, 10);

        assert_eq!(t.source(), A);
        assert_eq!(t.destination(), B);
        assert_eq!(t.comparison(), Comparison::GreaterThan);
        assert_eq!(*t.comparand(), 10);
    }

    #[test]
    fn generic_transition_reads_live_context() {
        let t = GenericTransition::new(A, B, Comparison::GreaterThan, |c: &i32| *c, 10);

        assert!(!t.can_transition(&10));
        assert!(t.can_transition(&11));
    }

    #[test]
    fn generic_transition_can_project_fields() {
        struct Ball {
            reached_goal: bool,
        }

        let t = GenericTransition::new(A, B, Comparison::Equals, |b: &Ball| b.reached_goal, true);

        assert!(!t.can_transition(&Ball {
            reached_goal: false
        }));
        assert!(t.can_transition(&Ball { reached_goal: true }));
    }

    #[test]
    fn watching_reflects_current_cell_value() {
        let cell = Rc::new(Cell::new(5));
        let t: GenericTransition<(), i32, i32> =
            GenericTransition::watching(B, A, Comparison::Equals, Rc::clone(&cell), 0);

        assert!(!t.can_transition(&()));
        cell.set(0);
        assert!(t.can_transition(&()));
    }

    #[test]
    fn generic_transition_on_transition_is_noop() {
        let mut t = GenericTransition::new(A, B, Comparison::Equals, |c: &i32| *c, 3);
        let mut context = 3;

        t.on_transition(&mut context);

        assert_eq!(context, 3);
    }

    #[test]
    fn fn_transition_uses_guard() {
        let t = FnTransition::new(A, B, |c: &Vec<u8>| c.len() > 1);

        assert!(!t.can_transition(&vec![1]));
        assert!(t.can_transition(&vec![1, 2]));
    }

    #[test]
    fn fn_transition_runs_action_when_taken() {
        let mut t = FnTransition::new(A, B, |_: &Vec<String>| true)
            .with_action(|log: &mut Vec<String>| log.push("left A".to_string()));
        let mut log = Vec::new();

        t.on_transition(&mut log);

        assert_eq!(log, vec!["left A".to_string()]);
    }

    #[test]
    fn fn_transition_without_action_is_noop() {
        let mut t = FnTransition::new(A, B, |_: &u32| true);
        let mut context = 9;

        t.on_transition(&mut context);

        assert_eq!(context, 9);
    }

    #[test]
    fn debug_output_names_endpoints() {
        let t = FnTransition::new(A, B, |_: &()| true);
        let rendered = format!("{t:?}");
        assert!(rendered.contains("FnTransition"));
        assert!(rendered.contains("has_action: false"));
    }
}
