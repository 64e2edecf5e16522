//! History aggregation and reporting for the gig-platform policy lab.
//!
//! The engine is stateless; callers that want to look back over several
//! evaluations record each snapshot into a [`SnapshotHistory`]. From there
//! this crate derives descriptive statistics, trend ratios and a
//! [`HistoryAnalysis`], assesses a parameter vector against that analysis
//! in a [`PolicyAssessment`], and writes a comma-separated export.
//!
//! # Modules
//!
//! - [`history`] -- Bounded FIFO of timestamped snapshots
//! - [`metric`] -- Scalar metrics tracked across a history
//! - [`stats`] -- Mean, variance, extremes and the trend ratio
//! - [`analysis`] -- Aggregated analysis with trend classification
//! - [`assessment`] -- Threshold-based policy assessment
//! - [`export`] -- CSV rendering
//! - [`error`] -- Export errors

pub mod analysis;
pub mod assessment;
pub mod error;
pub mod export;
pub mod history;
pub mod metric;
pub mod stats;

pub use analysis::{HistoryAnalysis, MetricTrends, TrendDirection, data_quality};
pub use assessment::{PolicyAssessment, RiskAssessment, StatisticalSummary};
pub use error::ReportError;
pub use export::{export_csv, to_csv_string, write_csv};
pub use history::{DEFAULT_CAPACITY, HistoryEntry, SnapshotHistory};
pub use metric::Metric;
pub use stats::{SeriesStats, trend};
