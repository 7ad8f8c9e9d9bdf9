use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::stock::Stock;

/// Stable calendar-day identifier, produced by [`crate::calendar::day_key`].
pub type DayKey = String;

/// The main data container of a session: one stock-list snapshot per visited
/// calendar day.
///
/// Day keys are opaque here; the calendar module owns their format. A key,
/// once present, is never overwritten: recording on an existing key keeps
/// the stored snapshot, so a materialized day can never re-roll its prices.
/// Per-day order is the feed order of day 1, preserved on every later day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    days: HashMap<DayKey, Vec<Stock>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot under a day key. First write wins: returns `false`
    /// (and keeps the existing snapshot) if the day was already present.
    pub fn record(&mut self, key: DayKey, stocks: Vec<Stock>) -> bool {
        if self.days.contains_key(&key) {
            return false;
        }
        self.days.insert(key, stocks);
        true
    }

    /// The snapshot recorded for a day, if that day has been visited.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[Stock]> {
        self.days.get(key).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.days.contains_key(key)
    }

    /// Number of days materialized so far.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All visited day keys in chronological order.
    /// Day keys are ISO dates, so lexicographic order is date order.
    #[must_use]
    pub fn day_keys(&self) -> Vec<&DayKey> {
        let mut keys: Vec<&DayKey> = self.days.keys().collect();
        keys.sort();
        keys
    }
}
