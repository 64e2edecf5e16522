//! Enumeration types for the policy lab.
//!
//! Classification labels attached to every snapshot, the recommendation
//! vocabulary, and the names of the nine tunable parameters.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Parameter names
// ---------------------------------------------------------------------------

/// One of the nine tunable inputs of a [`ParameterVector`].
///
/// Used to name the offending field in validation errors and to label
/// columns in tabular exports.
///
/// [`ParameterVector`]: crate::ParameterVector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ParameterField {
    /// Platform commission rate.
    R,
    /// Labor intensity.
    E,
    /// Algorithmic routing efficiency.
    Eta,
    /// Consumer wait tolerance in minutes.
    Tau,
    /// Social-optimum blending weight.
    Lambda,
    /// Algorithmic surveillance intensity.
    Monitoring,
    /// Market competitiveness.
    Competition,
    /// Regulatory strictness.
    Regulation,
    /// Technology adoption level.
    Innovation,
}

impl ParameterField {
    /// Every field, in export column order.
    pub const ALL: [Self; 9] = [
        Self::R,
        Self::E,
        Self::Eta,
        Self::Tau,
        Self::Lambda,
        Self::Competition,
        Self::Innovation,
        Self::Monitoring,
        Self::Regulation,
    ];

    /// Short column name used in exports and error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::E => "e",
            Self::Eta => "eta",
            Self::Tau => "tau",
            Self::Lambda => "lambda",
            Self::Monitoring => "monitoring",
            Self::Competition => "competition",
            Self::Regulation => "regulation",
            Self::Innovation => "innovation",
        }
    }
}

impl core::fmt::Display for ParameterField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classification labels
// ---------------------------------------------------------------------------

/// Rider stress tier derived from the stress probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum StressLevel {
    /// Stress probability at or below 0.5.
    Stable,
    /// Stress probability above 0.5.
    High,
    /// Stress probability above 0.7.
    Critical,
}

/// Market structure derived from the competition parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum MarketStatus {
    /// Competition at or below 0.4.
    Monopolistic,
    /// Competition above 0.4.
    Oligopoly,
    /// Competition above 0.7.
    Competitive,
}

/// Regulatory regime derived from the regulation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum RegulationStatus {
    /// Regulation at or below 0.3.
    LaissezFaire,
    /// Regulation above 0.3.
    Moderate,
    /// Regulation above 0.6.
    Strict,
}

/// Sustainability tier derived from the sustainability index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum SustainabilityLevel {
    /// Index at or below 60.
    Poor,
    /// Index above 60.
    Good,
    /// Index above 80.
    Excellent,
}

// ---------------------------------------------------------------------------
// Recommendation vocabulary
// ---------------------------------------------------------------------------

/// Kind of advisory record, serialized as the record's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum RecommendationKind {
    /// Needs immediate attention.
    Urgent,
    /// Calls for a regulatory policy change.
    Policy,
    /// Concerns overall economic efficiency.
    Economic,
    /// Concerns social protection of riders.
    Social,
}

/// Policy area a recommendation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RecommendationCategory {
    /// Working-time limits and rest rules.
    LaborProtection,
    /// Market concentration and competition.
    Antitrust,
    /// Resource allocation and productivity.
    EfficiencyImprovement,
    /// Income floors and social insurance.
    LaborRights,
}

/// Expected impact of acting on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum ImpactLevel {
    /// Moderate impact.
    Medium,
    /// Large impact.
    High,
    /// Impact on the viability of the rider workforce.
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_in_screaming_case() {
        let json = serde_json::to_string(&RegulationStatus::LaissezFaire).unwrap_or_default();
        assert_eq!(json, "\"LAISSEZ_FAIRE\"");
        let json = serde_json::to_string(&StressLevel::Critical).unwrap_or_default();
        assert_eq!(json, "\"CRITICAL\"");
    }

    #[test]
    fn parameter_fields_cover_all_nine_inputs() {
        let mut names: Vec<&str> = ParameterField::ALL.iter().map(|f| f.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
        assert_eq!(ParameterField::Eta.to_string(), "eta");
    }

    #[test]
    fn tiers_order_from_lowest_to_highest() {
        assert!(StressLevel::Stable < StressLevel::High);
        assert!(StressLevel::High < StressLevel::Critical);
        assert!(SustainabilityLevel::Poor < SustainabilityLevel::Excellent);
    }
}
