//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders for machines and transitions, plus
//! free helpers for the two most common edge shapes.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Comparison, StateId};
use crate::machine::{FnTransition, GenericTransition};

/// Create a transition guarded by an arbitrary predicate.
///
/// # Example
///
/// ```
/// use tickstate::builder::guarded_transition;
/// use tickstate::core::StateId;
/// use tickstate::machine::Transition;
///
/// let transition = guarded_transition(StateId::new(0), StateId::new(1), |hp: &u32| *hp == 0);
///
/// assert!(transition.can_transition(&0));
/// assert!(!transition.can_transition(&40));
/// ```
pub fn guarded_transition<C, F>(from: StateId, to: StateId, guard: F) -> FnTransition<C>
where
    F: Fn(&C) -> bool + 'static,
{
    FnTransition::new(from, to, guard)
}

/// Create a transition comparing a live value from the context against a
/// fixed comparand.
///
/// # Example
///
/// ```
/// use tickstate::builder::compare_transition;
/// use tickstate::core::{Comparison, StateId};
/// use tickstate::machine::Transition;
///
/// struct Golf {
///     strokes: u8,
/// }
///
/// let transition = compare_transition(
///     StateId::new(0),
///     StateId::new(1),
///     Comparison::GreaterOrEqual,
///     |g: &Golf| g.strokes,
///     6,
/// );
///
/// assert!(transition.can_transition(&Golf { strokes: 6 }));
/// assert!(!transition.can_transition(&Golf { strokes: 2 }));
/// ```
pub fn compare_transition<C, A, B, F>(
    from: StateId,
    to: StateId,
    comparison: Comparison,
    probe: F,
    comparand: B,
) -> GenericTransition<C, A, B>
where
    A: PartialOrd<B>,
    F: Fn(&C) -> A + 'static,
{
    GenericTransition::new(from, to, comparison, probe, comparand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{StateMachine, Transition};

    #[test]
    fn guarded_transition_respects_guard() {
        let transition = guarded_transition(StateId::new(0), StateId::new(1), |s: &String| {
            s.is_empty()
        });

        assert!(transition.can_transition(&String::new()));
        assert!(!transition.can_transition(&"x".to_string()));
    }

    #[test]
    fn helpers_drive_a_machine() {
        let mut machine = StateMachine::new(0);
        let a = machine.add_state(|c: &mut i32| *c += 2);
        let b = machine.add_state(|c: &mut i32| *c -= 1);
        machine
            .add_transition(compare_transition(a, b, Comparison::GreaterOrEqual, |c: &i32| *c, 4))
            .unwrap();
        machine
            .add_transition(guarded_transition(b, a, |c: &i32| *c <= 0))
            .unwrap();

        machine.update();
        machine.update();
        assert_eq!(machine.active_state(), Some(b));

        for _ in 0..4 {
            machine.update();
        }
        assert_eq!(*machine.context(), 0);
        assert_eq!(machine.active_state(), Some(a));
    }
}
