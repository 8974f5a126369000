//! Bounded log of fired transitions.
//!
//! The machine always remembers the endpoints of the most recent transition.
//! When a history limit is configured it additionally keeps the last N
//! transitions here, oldest first.

use super::state::StateId;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateId, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     tick: 11,
///     from: StateId::new(0),
///     to: StateId::new(1),
///     at: Utc::now(),
/// };
/// assert_eq!(record.tick, 11);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRecord {
    /// The tick (1-based `update` count) on which the transition fired
    pub tick: u64,
    /// The state that was active before the transition
    pub from: StateId,
    /// The state that became active
    pub to: StateId,
    /// Wall-clock time the transition fired
    pub at: DateTime<Utc>,
}

/// Ordered, capacity-bounded history of transitions.
///
/// A history with limit `0` records nothing.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateId, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let a = StateId::new(0);
/// let b = StateId::new(1);
///
/// let mut history = TransitionHistory::with_limit(2);
/// history.record(TransitionRecord { tick: 1, from: a, to: b, at: Utc::now() });
/// history.record(TransitionRecord { tick: 2, from: b, to: a, at: Utc::now() });
/// history.record(TransitionRecord { tick: 3, from: a, to: b, at: Utc::now() });
///
/// // Oldest record was evicted
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec![b, a, b]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
    limit: usize,
}

impl TransitionHistory {
    /// Create a history keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(limit.min(1024)),
            limit,
        }
    }

    /// Maximum number of records retained.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// False when the limit is `0` and [`record`](Self::record) is a no-op.
    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    /// Append a record, evicting the oldest when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if !self.is_enabled() {
            return;
        }
        if self.records.len() == self.limit {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// Records in firing order, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// States traversed: the `from` of the oldest retained record, then
    /// the `to` of every record.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Wall time between the oldest and newest retained record.
    ///
    /// Returns `None` if there are no records.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.at.signed_duration_since(first.at).to_std().ok()
    }

    /// Drop every record, keeping the limit.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tick: u64, from: usize, to: usize) -> TransitionRecord {
        TransitionRecord {
            tick,
            from: StateId::new(from),
            to: StateId::new(to),
            at: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::with_limit(4);
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.span().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = TransitionHistory::with_limit(0);
        history.record(record(1, 0, 1));
        assert!(history.is_empty());
    }

    #[test]
    fn default_history_is_disabled() {
        let mut history = TransitionHistory::default();
        history.record(record(1, 0, 1));
        assert_eq!(history.limit(), 0);
        assert!(!history.is_enabled());
        assert!(history.is_empty());
    }

    #[test]
    fn positive_limit_enables_recording() {
        assert!(TransitionHistory::with_limit(1).is_enabled());
        assert!(!TransitionHistory::with_limit(0).is_enabled());
    }

    #[test]
    fn records_in_firing_order() {
        let mut history = TransitionHistory::with_limit(8);
        history.record(record(11, 0, 1));
        history.record(record(22, 1, 0));

        let ticks: Vec<u64> = history.records().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![11, 22]);
        assert_eq!(history.last().map(|r| r.tick), Some(22));
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut history = TransitionHistory::with_limit(2);
        history.record(record(1, 0, 1));
        history.record(record(2, 1, 2));
        history.record(record(3, 2, 0));

        assert_eq!(history.len(), 2);
        let ticks: Vec<u64> = history.records().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![2, 3]);
    }

    #[test]
    fn path_follows_records() {
        let mut history = TransitionHistory::with_limit(8);
        history.record(record(1, 0, 1));
        history.record(record(2, 1, 2));

        assert_eq!(
            history.path(),
            vec![StateId::new(0), StateId::new(1), StateId::new(2)]
        );
    }

    #[test]
    fn span_measures_first_to_last() {
        let mut history = TransitionHistory::with_limit(8);
        let start = Utc::now();
        history.record(TransitionRecord {
            at: start,
            ..record(1, 0, 1)
        });
        history.record(TransitionRecord {
            at: start + chrono::Duration::milliseconds(250),
            ..record(2, 1, 0)
        });

        assert_eq!(history.span(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_record_has_zero_span() {
        let mut history = TransitionHistory::with_limit(1);
        history.record(record(1, 0, 1));
        assert_eq!(history.span(), Some(Duration::ZERO));
    }

    #[test]
    fn clear_keeps_limit() {
        let mut history = TransitionHistory::with_limit(3);
        history.record(record(1, 0, 1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.limit(), 3);
    }
}
