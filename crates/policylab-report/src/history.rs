//! Bounded record of past evaluations.
//!
//! Entries are kept in insertion order. Once the history is full, each new
//! entry evicts the oldest one.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use policylab_types::{EquilibriumSnapshot, HistoryEntryId, ParameterVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::HistoryAnalysis;
use crate::metric::Metric;
use crate::stats::{self, SeriesStats};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 30;

/// One recorded evaluation: the inputs, the outputs and when it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Time-ordered identifier.
    pub id: HistoryEntryId,
    /// Wall-clock time of the evaluation.
    pub recorded_at: DateTime<Utc>,
    /// Parameter vector the snapshot was computed from.
    pub params: ParameterVector,
    /// The computed snapshot.
    pub snapshot: EquilibriumSnapshot,
}

impl HistoryEntry {
    /// Stamp a snapshot with a fresh id and the current time.
    pub fn new(params: ParameterVector, snapshot: EquilibriumSnapshot) -> Self {
        Self::at(Utc::now(), params, snapshot)
    }

    /// Stamp a snapshot with a fresh id and the given time.
    pub fn at(
        recorded_at: DateTime<Utc>,
        params: ParameterVector,
        snapshot: EquilibriumSnapshot,
    ) -> Self {
        Self {
            id: HistoryEntryId::new(),
            recorded_at,
            params,
            snapshot,
        }
    }
}

/// First-in-first-out history with a fixed capacity.
///
/// The history is owned by the caller; callers sharing it across threads
/// wrap it in their own lock.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SnapshotHistory {
    /// Create an empty history holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of entries kept.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a snapshot stamped with the current time.
    pub fn record(
        &mut self,
        params: ParameterVector,
        snapshot: EquilibriumSnapshot,
    ) -> HistoryEntryId {
        let entry = HistoryEntry::new(params, snapshot);
        let id = entry.id;
        self.push(entry);
        id
    }

    /// Append an entry, returning the evicted entry if the history was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        if let Some(old) = &evicted {
            debug!(
                evicted_id = %old.id,
                capacity = self.capacity,
                "history full, evicted oldest entry"
            );
        }
        self.entries.push_back(entry);
        evicted
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Look an entry up by id.
    pub fn get(&self, id: HistoryEntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Values of one metric from oldest to newest.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.entries
            .iter()
            .map(|entry| metric.read(&entry.snapshot))
            .collect()
    }

    /// Descriptive statistics of one metric; `None` when empty.
    pub fn stats(&self, metric: Metric) -> Option<SeriesStats> {
        SeriesStats::from_series(&self.series(metric))
    }

    /// Trend ratio of one metric over `window` samples.
    pub fn trend(&self, metric: Metric, window: usize) -> f64 {
        stats::trend(&self.series(metric), window)
    }

    /// Full historical analysis; `None` when empty.
    pub fn analyze(&self, window: usize) -> Option<HistoryAnalysis> {
        HistoryAnalysis::from_history(self, window)
    }
}

impl<'a> IntoIterator for &'a SnapshotHistory {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
