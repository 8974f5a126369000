//! State identity and the per-tick behavior capability.
//!
//! A state is an opaque unit of behavior. The machine never looks inside it:
//! it only calls [`State::update`] once per tick while the state is active.

use std::fmt;

/// Stable handle to a state registered with a [`StateMachine`].
///
/// Ids are arena indices assigned in registration order, starting at zero.
/// They can be constructed ahead of time with [`StateId::new`] so that a
/// transition may name a state that will only be registered later.
///
/// [`StateMachine`]: crate::machine::StateMachine
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateId;
///
/// let id = StateId::new(2);
/// assert_eq!(id.index(), 2);
/// assert_eq!(id.to_string(), "#2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    /// Create a handle for the state at `index` in registration order.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The arena index this handle refers to.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tick of externally visible behavior.
///
/// `update` has no return value and no failure mode: a state that needs to
/// report something does so through the context it mutates. Panics raised
/// here propagate out of [`StateMachine::update`] untouched.
///
/// Any `FnMut(&mut C)` closure is a `State<C>`, so most callers never need to
/// implement this trait by hand.
///
/// [`StateMachine::update`]: crate::machine::StateMachine::update
///
/// # Example
///
/// ```rust
/// use tickstate::core::State;
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl State<Vec<String>> for Countdown {
///     fn update(&mut self, log: &mut Vec<String>) {
///         self.remaining = self.remaining.saturating_sub(1);
///         log.push(format!("{} left", self.remaining));
///     }
///
///     fn name(&self) -> &str {
///         "Countdown"
///     }
/// }
///
/// let mut state = Countdown { remaining: 2 };
/// let mut log = Vec::new();
/// state.update(&mut log);
/// assert_eq!(log, vec!["1 left".to_string()]);
/// ```
pub trait State<C> {
    /// Run this state's behavior for the current tick.
    fn update(&mut self, context: &mut C);

    /// Name used in logs and diagnostics.
    ///
    /// Default implementation returns `"state"`.
    fn name(&self) -> &str {
        "state"
    }
}

impl<C, F> State<C> for F
where
    F: FnMut(&mut C),
{
    fn update(&mut self, context: &mut C) {
        self(context)
    }
}

/// Boxed behavior stored by [`GenericState`].
pub type StateFunc<C> = Box<dyn FnMut(&mut C)>;

/// A named state backed by a callback.
///
/// Data the callback needs beyond the machine context is captured by the
/// closure itself.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{GenericState, State};
///
/// let mut increment = GenericState::new("Increment", |count: &mut i32| *count += 1);
///
/// let mut count = 0;
/// increment.update(&mut count);
/// increment.update(&mut count);
///
/// assert_eq!(count, 2);
/// assert_eq!(increment.name(), "Increment");
/// ```
pub struct GenericState<C> {
    name: String,
    func: StateFunc<C>,
}

impl<C> GenericState<C> {
    /// Create a state that invokes `func` on every tick.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: FnMut(&mut C) + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl<C> State<C> for GenericState<C> {
    fn update(&mut self, context: &mut C) {
        (self.func)(context)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<C> fmt::Debug for GenericState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericState")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
