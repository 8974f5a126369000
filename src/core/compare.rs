//! Comparison operators for value-driven transitions.
//!
//! A [`Comparison`] is a pure binary predicate between a live value and a
//! fixed comparand. It is the operator half of a
//! [`GenericTransition`](crate::machine::GenericTransition).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Operator applied as `compare(live, comparand)`.
///
/// The live value and the comparand may be different types. `Equals` and
/// `NotEquals` use [`PartialEq`]; the ordering operators use
/// [`PartialOrd::partial_cmp`]. Incomparable pairs (such as `NaN` against
/// anything) satisfy only [`Comparison::NotEquals`].
///
/// # Example
///
/// ```rust
/// use tickstate::core::Comparison;
///
/// assert!(Comparison::GreaterThan.compare(&11, &10));
/// assert!(!Comparison::GreaterThan.compare(&10, &10));
/// assert!(Comparison::Equals.compare(&0, &0));
/// assert!(Comparison::NotEquals.compare(&f32::NAN, &1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    GreaterThan,
    LessThan,
    Equals,
    NotEquals,
    GreaterOrEqual,
    LessOrEqual,
}

impl Comparison {
    /// Every operator, in declaration order.
    pub const ALL: [Comparison; 6] = [
        Comparison::GreaterThan,
        Comparison::LessThan,
        Comparison::Equals,
        Comparison::NotEquals,
        Comparison::GreaterOrEqual,
        Comparison::LessOrEqual,
    ];

    /// Evaluate `lhs <op> rhs`.
    pub fn compare<A, B>(self, lhs: &A, rhs: &B) -> bool
    where
        A: PartialOrd<B> + ?Sized,
        B: ?Sized,
    {
        match self {
            Self::Equals => lhs == rhs,
            Self::NotEquals => lhs != rhs,
            Self::GreaterThan => lhs.partial_cmp(rhs) == Some(Ordering::Greater),
            Self::LessThan => lhs.partial_cmp(rhs) == Some(Ordering::Less),
            Self::GreaterOrEqual => {
                matches!(lhs.partial_cmp(rhs), Some(Ordering::Greater | Ordering::Equal))
            }
            Self::LessOrEqual => {
                matches!(lhs.partial_cmp(rhs), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }

    /// Operator symbol used in logs.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
        }
    }

}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
