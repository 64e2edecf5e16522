//! Equilibrium engine, inequality estimate and policy rules for the
//! gig-platform policy lab.
//!
//! The crate evaluates a single-instant market equilibrium of a delivery
//! platform from nine policy-tunable parameters. Every output is a
//! closed-form expression of the inputs and the fixed structural
//! constants; there is no search, no time evolution and no shared state.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `policylab-config.yaml`.
//! - [`constants`] -- [`EngineConstants`], the structural coefficients.
//! - [`engine`] -- [`EquilibriumEngine`], the 13-stage formula pipeline.
//! - [`error`] -- [`InvalidParameterError`] for the checked path.
//! - [`inequality`] -- [`InequalityAnalyzer`], the three-group Gini estimate.
//! - [`labels`] -- Threshold classification of snapshot metrics.
//! - [`recommendation`] -- [`RecommendationEngine`], ordered advisory rules.
//! - [`scenario`] -- [`ScenarioPreset`] parameter bundles.
//! - [`validation`] -- Documented-range checks.
//!
//! # Usage
//!
//! ```
//! use policylab_core::EquilibriumEngine;
//! use policylab_types::ParameterVector;
//!
//! let engine = EquilibriumEngine::default();
//! let snapshot = engine.compute(&ParameterVector::new(0.2, 2.5, 0.85, 30.0, 0.0));
//! assert!((0.0..=1.0).contains(&snapshot.stress_probability));
//! assert!(snapshot.recommendations.is_empty());
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod inequality;
pub mod labels;
pub mod recommendation;
pub mod scenario;
pub mod validation;

pub use config::{ConfigError, HistoryConfig, LabConfig, LoggingConfig};
pub use constants::EngineConstants;
pub use engine::EquilibriumEngine;
pub use error::InvalidParameterError;
pub use inequality::{DEGENERATE_GINI, InequalityAnalyzer};
pub use recommendation::{RecommendationEngine, RecommendationInputs, RecommendationRule};
pub use scenario::{ScenarioPreset, UnknownPreset};
