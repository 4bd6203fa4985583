//! Value history of a column.
//!
//! Records every change of the digit a column shows, with the cause and the
//! time it happened. The history is bounded: once full, the oldest change is
//! dropped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of changes a history keeps.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Largest capacity a column configuration may ask for.
pub const MAX_HISTORY_CAPACITY: usize = 4096;

/// What caused a value change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCause {
    /// A user selected a row.
    Selection,
    /// The host overrode the value.
    External,
}

/// Record of a single value change.
///
/// # Example
///
/// ```rust
/// use beadboost::core::{ChangeCause, ValueChange};
/// use chrono::Utc;
///
/// let change = ValueChange {
///     from: 0,
///     to: 3,
///     cause: ChangeCause::Selection,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.to, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueChange {
    /// The digit before the change
    pub from: u8,
    /// The digit after the change
    pub to: u8,
    /// Why the digit changed
    pub cause: ChangeCause,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of value changes.
///
/// # Example
///
/// ```rust
/// use beadboost::core::{ChangeCause, ValueChange, ValueHistory};
/// use chrono::Utc;
///
/// let mut history = ValueHistory::new();
/// history.record(ValueChange { from: 0, to: 3, cause: ChangeCause::Selection, timestamp: Utc::now() });
/// history.record(ValueChange { from: 3, to: 8, cause: ChangeCause::Selection, timestamp: Utc::now() });
///
/// assert_eq!(history.get_path(), vec![0, 3, 8]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueHistory {
    changes: VecDeque<ValueChange>,
    capacity: usize,
}

impl Default for ValueHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history keeping at most `capacity` changes.
    ///
    /// A capacity of zero keeps nothing. Storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Append a change, evicting the oldest one when full.
    pub fn record(&mut self, change: ValueChange) {
        if self.capacity == 0 {
            return;
        }
        if self.changes.len() == self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// Digits traversed: the first retained `from`, then every `to`.
    pub fn get_path(&self) -> Vec<u8> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Time between the first and last retained change.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained changes, oldest first.
    pub fn changes(&self) -> impl Iterator<Item = &ValueChange> {
        self.changes.iter()
    }

    /// Most recent change.
    pub fn last(&self) -> Option<&ValueChange> {
        self.changes.back()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Maximum number of retained changes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
