//! Transition history tracking.
//!
//! Provides immutable tracking of dispatched actions over time. The log
//! is purely diagnostic: the transition logic never consults it.

use super::action::Action;
use super::phase::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action.
///
/// Records are immutable values. Self-loops at the bounds and the silent
/// saturation edge are recorded like any other dispatch, so the log is a
/// complete audit of the machine's edges.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The phase before the dispatch
    pub from: Phase,
    /// The phase after the dispatch
    pub to: Phase,
    /// The action that was dispatched
    pub action: Action,
    /// The count after the dispatch
    pub count: i64,
    /// When the dispatch occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of dispatched transitions.
///
/// The log is immutable - [`record`](TransitionLog::record) returns a new
/// log with the record added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use tally::core::{Action, Phase, TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Phase::Normal,
///     to: Phase::Normal,
///     action: Action::Increment,
///     count: 1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![Phase::Normal, Phase::Normal]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a dispatch, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the sequence of phases traversed.
    ///
    /// Returns the initial phase followed by the `to` phase of each
    /// record. Empty when nothing has been dispatched.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in dispatch order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
