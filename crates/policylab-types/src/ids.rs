//! Type-safe identifier wrappers around [`Uuid`].
//!
//! History entries carry a UUID v7 (time-ordered) identifier so that
//! exported rows sort the same way they were recorded.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Unique identifier for one recorded evaluation in a snapshot history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryEntryId(pub Uuid);

impl HistoryEntryId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for HistoryEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for HistoryEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for HistoryEntryId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<HistoryEntryId> for Uuid {
    fn from(id: HistoryEntryId) -> Self {
        id.0
    }
}
