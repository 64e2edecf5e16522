//! Named parameter bundles used to pre-populate an evaluation.

use std::str::FromStr;

use policylab_types::ParameterVector;
use serde::{Deserialize, Serialize};

/// Wait tolerance shared by every preset, in minutes.
const PRESET_TAU: f64 = 30.0;

/// A named market scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioPreset {
    /// The calibration point of the model.
    Baseline,
    /// Tight labor regulation with strong social-optimum blending.
    StrictRegulation,
    /// Many competing platforms driving commissions down.
    IntenseCompetition,
    /// High technology adoption and routing efficiency.
    InnovationBreakthrough,
}

impl ScenarioPreset {
    /// Every preset, in display order.
    pub const ALL: [Self; 4] = [
        Self::Baseline,
        Self::StrictRegulation,
        Self::IntenseCompetition,
        Self::InnovationBreakthrough,
    ];

    /// Machine-readable key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::StrictRegulation => "strict-regulation",
            Self::IntenseCompetition => "intense-competition",
            Self::InnovationBreakthrough => "innovation-breakthrough",
        }
    }

    /// Human-readable name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::StrictRegulation => "Strict regulation",
            Self::IntenseCompetition => "Intense competition",
            Self::InnovationBreakthrough => "Innovation breakthrough",
        }
    }

    /// The parameter vector this preset stands for.
    pub const fn params(self) -> ParameterVector {
        match self {
            Self::Baseline => ParameterVector::new(0.2, 2.5, 0.85, PRESET_TAU, 0.0)
                .with_monitoring(0.5)
                .with_competition(0.3)
                .with_regulation(0.2)
                .with_innovation(0.6),
            Self::StrictRegulation => ParameterVector::new(0.15, 2.0, 0.8, PRESET_TAU, 0.6)
                .with_monitoring(0.7)
                .with_competition(0.4)
                .with_regulation(0.8)
                .with_innovation(0.5),
            Self::IntenseCompetition => ParameterVector::new(0.12, 3.5, 0.9, PRESET_TAU, 0.2)
                .with_monitoring(0.8)
                .with_competition(0.8)
                .with_regulation(0.1)
                .with_innovation(0.7),
            Self::InnovationBreakthrough => ParameterVector::new(0.18, 1.8, 0.95, PRESET_TAU, 0.4)
                .with_monitoring(0.3)
                .with_competition(0.5)
                .with_regulation(0.3)
                .with_innovation(0.9),
        }
    }
}

impl core::fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// The key did not name a preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scenario preset: {0}")]
pub struct UnknownPreset(pub String);

impl FromStr for ScenarioPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|preset| preset.key() == normalized)
            .ok_or_else(|| UnknownPreset(String::from(s)))
    }
}
