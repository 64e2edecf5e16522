//! The nine caller-supplied inputs of one equilibrium evaluation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ParameterField;

/// Default algorithmic surveillance intensity.
pub const DEFAULT_MONITORING: f64 = 0.5;

/// Default market competitiveness.
pub const DEFAULT_COMPETITION: f64 = 0.3;

/// Default regulatory strictness.
pub const DEFAULT_REGULATION: f64 = 0.2;

/// Default technology adoption level.
pub const DEFAULT_INNOVATION: f64 = 0.6;

/// Policy and market inputs for a single evaluation.
///
/// No validation happens on construction. Ranges are documented per field;
/// the core crate offers a checked evaluation path that enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParameterVector {
    /// Platform commission rate, `[0, 1)`.
    pub r: f64,
    /// Labor intensity (deliveries per effort level), `> 0`.
    pub e: f64,
    /// Algorithmic routing efficiency, `(0, 1]`.
    pub eta: f64,
    /// Consumer wait tolerance in minutes, `> 0`.
    pub tau: f64,
    /// Social-optimum blending weight, `[0, 1]`.
    pub lambda: f64,
    /// Algorithmic surveillance intensity, `[0, 1]`.
    #[serde(default = "default_monitoring")]
    pub monitoring: f64,
    /// Market competitiveness, `[0, 1]`.
    #[serde(default = "default_competition")]
    pub competition: f64,
    /// Regulatory strictness, `[0, 1]`.
    #[serde(default = "default_regulation")]
    pub regulation: f64,
    /// Technology adoption level, `[0, 1]`.
    #[serde(default = "default_innovation")]
    pub innovation: f64,
}

impl ParameterVector {
    /// Build a vector from the five required inputs, leaving the four
    /// optional ones at their documented defaults.
    pub const fn new(r: f64, e: f64, eta: f64, tau: f64, lambda: f64) -> Self {
        Self {
            r,
            e,
            eta,
            tau,
            lambda,
            monitoring: DEFAULT_MONITORING,
            competition: DEFAULT_COMPETITION,
            regulation: DEFAULT_REGULATION,
            innovation: DEFAULT_INNOVATION,
        }
    }

    /// Replace the monitoring intensity.
    #[must_use]
    pub const fn with_monitoring(mut self, monitoring: f64) -> Self {
        self.monitoring = monitoring;
        self
    }

    /// Replace the competition level.
    #[must_use]
    pub const fn with_competition(mut self, competition: f64) -> Self {
        self.competition = competition;
        self
    }

    /// Replace the regulation strictness.
    #[must_use]
    pub const fn with_regulation(mut self, regulation: f64) -> Self {
        self.regulation = regulation;
        self
    }

    /// Replace the innovation level.
    #[must_use]
    pub const fn with_innovation(mut self, innovation: f64) -> Self {
        self.innovation = innovation;
        self
    }

    /// Read a field by name.
    pub const fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::R => self.r,
            ParameterField::E => self.e,
            ParameterField::Eta => self.eta,
            ParameterField::Tau => self.tau,
            ParameterField::Lambda => self.lambda,
            ParameterField::Monitoring => self.monitoring,
            ParameterField::Competition => self.competition,
            ParameterField::Regulation => self.regulation,
            ParameterField::Innovation => self.innovation,
        }
    }
}

/// The dashboard's starting point: `r = 0.2, e = 2.5, eta = 0.85,
/// tau = 30, lambda = 0` with the optional inputs at their defaults.
impl Default for ParameterVector {
    fn default() -> Self {
        Self::new(0.2, 2.5, 0.85, 30.0, 0.0)
    }
}

const fn default_monitoring() -> f64 {
    DEFAULT_MONITORING
}

const fn default_competition() -> f64 {
    DEFAULT_COMPETITION
}

const fn default_regulation() -> f64 {
    DEFAULT_REGULATION
}

const fn default_innovation() -> f64 {
    DEFAULT_INNOVATION
}
