//! Threshold classification of snapshot metrics.
//!
//! Every threshold is a strict inequality: a value exactly on a boundary
//! falls to the lower tier.

use policylab_types::{
    MarketStatus, RegulationStatus, SnapshotLabels, StressLevel, SustainabilityLevel,
};

/// Welfare a Pareto-labelled state must exceed.
pub const PARETO_WELFARE: f64 = 15_000.0;

/// Market efficiency a Pareto-labelled state must exceed.
pub const PARETO_EFFICIENCY: f64 = 75.0;

/// Stress tier for a stress probability.
pub fn stress_level(p: f64) -> StressLevel {
    if p > 0.7 {
        StressLevel::Critical
    } else if p > 0.5 {
        StressLevel::High
    } else {
        StressLevel::Stable
    }
}

/// Market structure for a competition level.
pub fn market_status(competition: f64) -> MarketStatus {
    if competition > 0.7 {
        MarketStatus::Competitive
    } else if competition > 0.4 {
        MarketStatus::Oligopoly
    } else {
        MarketStatus::Monopolistic
    }
}

/// Regulatory regime for a regulation level.
pub fn regulation_status(regulation: f64) -> RegulationStatus {
    if regulation > 0.6 {
        RegulationStatus::Strict
    } else if regulation > 0.3 {
        RegulationStatus::Moderate
    } else {
        RegulationStatus::LaissezFaire
    }
}

/// Sustainability tier for a sustainability index.
pub fn sustainability_level(index: f64) -> SustainabilityLevel {
    if index > 80.0 {
        SustainabilityLevel::Excellent
    } else if index > 60.0 {
        SustainabilityLevel::Good
    } else {
        SustainabilityLevel::Poor
    }
}

/// Metrics the labels are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelInputs {
    /// Social welfare.
    pub social_welfare: f64,
    /// Aggregate rider utility.
    pub rider_utility: f64,
    /// Market efficiency index.
    pub market_efficiency: f64,
    /// Stress probability.
    pub stress_probability: f64,
    /// Competition parameter.
    pub competition: f64,
    /// Regulation parameter.
    pub regulation: f64,
    /// Sustainability index.
    pub sustainability_index: f64,
}

/// Derive the full label set.
pub fn classify(inputs: &LabelInputs) -> SnapshotLabels {
    SnapshotLabels {
        is_pareto: inputs.social_welfare > PARETO_WELFARE
            && inputs.rider_utility > 0.0
            && inputs.market_efficiency > PARETO_EFFICIENCY,
        stress_level: stress_level(inputs.stress_probability),
        market_status: market_status(inputs.competition),
        regulation_status: regulation_status(inputs.regulation),
        sustainability_level: sustainability_level(inputs.sustainability_index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_fall_to_lower_tier() {
        assert_eq!(stress_level(0.7), StressLevel::High);
        assert_eq!(stress_level(0.5), StressLevel::Stable);
        assert_eq!(market_status(0.7), MarketStatus::Oligopoly);
        assert_eq!(market_status(0.4), MarketStatus::Monopolistic);
        assert_eq!(regulation_status(0.6), RegulationStatus::Moderate);
        assert_eq!(regulation_status(0.3), RegulationStatus::LaissezFaire);
        assert_eq!(sustainability_level(80.0), SustainabilityLevel::Good);
        assert_eq!(sustainability_level(60.0), SustainabilityLevel::Poor);
    }

    #[test]
    fn upper_tiers_reached_above_thresholds() {
        assert_eq!(stress_level(0.71), StressLevel::Critical);
        assert_eq!(market_status(0.8), MarketStatus::Competitive);
        assert_eq!(regulation_status(0.8), RegulationStatus::Strict);
        assert_eq!(sustainability_level(99.6), SustainabilityLevel::Excellent);
    }

    #[test]
    fn pareto_requires_all_three_conditions() {
        let healthy = LabelInputs {
            social_welfare: 16_000.0,
            rider_utility: 500.0,
            market_efficiency: 90.0,
            stress_probability: 0.3,
            competition: 0.5,
            regulation: 0.5,
            sustainability_index: 90.0,
        };
        assert!(classify(&healthy).is_pareto);

        let low_welfare = LabelInputs {
            social_welfare: 15_000.0,
            ..healthy
        };
        assert!(!classify(&low_welfare).is_pareto);

        let riders_losing = LabelInputs {
            rider_utility: -1.0,
            ..healthy
        };
        assert!(!classify(&riders_losing).is_pareto);

        let inefficient = LabelInputs {
            market_efficiency: 75.0,
            ..healthy
        };
        assert!(!classify(&inefficient).is_pareto);
    }
}
