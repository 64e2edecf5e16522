//! Output of one equilibrium evaluation.
//!
//! A snapshot is produced whole by the engine and never mutated
//! afterwards. Field names on the wire keep the short symbols used in the
//! dashboard (`D`, `P`, `Ur`, ...) so exported data lines up with the
//! model documentation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    ImpactLevel, MarketStatus, RecommendationCategory, RecommendationKind, RegulationStatus,
    StressLevel, SustainabilityLevel,
};

/// Negative externalities of the market state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ExternalityCosts {
    /// Emissions cost of rider effort.
    pub environmental: f64,
    /// Traffic congestion caused by delivery volume.
    pub traffic: f64,
    /// Cost of the gap between platform profit and rider utility.
    pub inequality: f64,
    /// Cost of biased dispatching, per order.
    pub algorithmic_bias: f64,
    /// Public cost of topping rider income up to the minimum wage.
    pub wage_subsidy: f64,
    /// All costs minus all benefits. May be negative.
    pub total_externality: f64,
}

/// Positive externalities of the market state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ExternalityBenefits {
    /// Value of employment provided to riders.
    pub employment: f64,
    /// Knowledge spillover from technology adoption.
    pub innovation_spillover: f64,
    /// Value of digitalized logistics.
    pub digitalization: f64,
}

/// One advisory record emitted by the recommendation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Recommendation {
    /// Kind of advice.
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    /// Policy area.
    pub category: RecommendationCategory,
    /// Short headline.
    pub title: String,
    /// One-sentence explanation.
    pub description: String,
    /// Expected impact of acting on it.
    pub impact: ImpactLevel,
}

/// Classification labels derived from the snapshot's metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SnapshotLabels {
    /// High welfare, positive rider utility and efficient allocation at once.
    pub is_pareto: bool,
    /// Rider stress tier.
    pub stress_level: StressLevel,
    /// Market structure tier.
    pub market_status: MarketStatus,
    /// Regulatory regime.
    pub regulation_status: RegulationStatus,
    /// Sustainability tier.
    pub sustainability_level: SustainabilityLevel,
}

/// Full set of outputs of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EquilibriumSnapshot {
    /// Order demand.
    #[serde(rename = "D")]
    pub demand: f64,
    /// Platform profit after tax and social contributions.
    #[serde(rename = "P")]
    pub platform_profit: f64,
    /// Aggregate rider utility across the rider population.
    #[serde(rename = "Ur")]
    pub rider_utility: f64,
    /// Social welfare: profit plus utility plus surplus minus externalities.
    #[serde(rename = "SW")]
    pub social_welfare: f64,
    /// Consumer surplus, never negative.
    #[serde(rename = "CS")]
    pub consumer_surplus: f64,
    /// Expected delivery time in minutes.
    #[serde(rename = "T")]
    pub delivery_time: f64,
    /// Probability of algorithmic stress on a rider, in `[0, 1]`.
    #[serde(rename = "p")]
    pub stress_probability: f64,
    /// Labor intensity after blending toward the social optimum.
    #[serde(rename = "e_eff")]
    pub effective_intensity: f64,
    /// Share of gross surplus retained as welfare, in `[0, 100]`.
    pub market_efficiency: f64,
    /// Three-group Gini estimate, in `[0, 1]`.
    pub gini_coefficient: f64,
    /// Environmental cost relative to welfare, in `[0, 100]`.
    pub sustainability_index: f64,
    /// Innovation times adjusted efficiency, as a percentage.
    pub innovation_index: f64,
    /// Regulation weighted by welfare against a 20 000 reference.
    pub regulatory_effectiveness: f64,
    /// Negative externalities.
    pub costs: ExternalityCosts,
    /// Positive externalities.
    pub benefits: ExternalityBenefits,
    /// Advisory records in rule order. Empty means nothing was flagged.
    #[serde(rename = "policy_recommendations")]
    pub recommendations: Vec<Recommendation>,
    /// Classification labels.
    pub labels: SnapshotLabels,
}
