//! Shared type definitions for the gig-platform policy lab.
//!
//! This crate is the single source of truth for the values that cross
//! crate boundaries: the parameter vector fed to the engine, the snapshot
//! it returns, and the identifiers used by the snapshot history. Types
//! flow downstream to `TypeScript` via `ts-rs` for the dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for history entries
//! - [`enums`] -- Classification labels, recommendation vocabulary, parameter names
//! - [`params`] -- The nine-field [`ParameterVector`]
//! - [`snapshot`] -- [`EquilibriumSnapshot`] and its breakdowns

pub mod enums;
pub mod ids;
pub mod params;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ImpactLevel, MarketStatus, ParameterField, RecommendationCategory, RecommendationKind,
    RegulationStatus, StressLevel, SustainabilityLevel,
};
pub use ids::HistoryEntryId;
pub use params::{
    DEFAULT_COMPETITION, DEFAULT_INNOVATION, DEFAULT_MONITORING, DEFAULT_REGULATION,
    ParameterVector,
};
pub use snapshot::{
    EquilibriumSnapshot, ExternalityBenefits, ExternalityCosts, Recommendation, SnapshotLabels,
};
