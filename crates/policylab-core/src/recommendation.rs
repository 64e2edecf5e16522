//! Rule-based policy recommendations.
//!
//! Each rule is an independent predicate over the market state paired
//! with the advisory record it emits. Rules are evaluated in list order
//! and never short-circuit each other, so the output order is the rule
//! order. The standard list holds four rules:
//!
//! | # | Condition | Kind | Impact |
//! |---|-----------|------|--------|
//! | 1 | `p > 0.7` | Urgent | High |
//! | 2 | `r > 0.25` and `competition < 0.4` | Policy | Medium |
//! | 3 | `SW < 10000` | Economic | High |
//! | 4 | `Ur < 0` | Social | Critical |
//!
//! An empty result means nothing was flagged; callers supply their own
//! neutral message.

use policylab_types::{ImpactLevel, Recommendation, RecommendationCategory, RecommendationKind};
use tracing::trace;

/// Stress probability above which riders need urgent protection.
pub const CRITICAL_STRESS: f64 = 0.7;

/// Commission rate above which a concentrated market is flagged.
pub const HIGH_COMMISSION: f64 = 0.25;

/// Competition level below which a high commission is flagged.
pub const LOW_COMPETITION: f64 = 0.4;

/// Social welfare below which allocation is considered inefficient.
pub const LOW_WELFARE: f64 = 10_000.0;

/// The slice of a market state the rules look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationInputs {
    /// Platform commission rate.
    pub commission: f64,
    /// Effective labor intensity.
    pub effective_intensity: f64,
    /// Rider stress probability.
    pub stress_probability: f64,
    /// Social welfare.
    pub social_welfare: f64,
    /// Aggregate rider utility.
    pub rider_utility: f64,
    /// Market competitiveness.
    pub competition: f64,
    /// Regulatory strictness.
    pub regulation: f64,
    /// Technology adoption level.
    pub innovation: f64,
}

/// One predicate and the record it emits.
#[derive(Debug, Clone)]
pub struct RecommendationRule {
    /// Stable rule name for logs.
    pub name: &'static str,
    condition: fn(&RecommendationInputs) -> bool,
    record: Recommendation,
}

impl RecommendationRule {
    /// Create a rule from a predicate and the record it emits when true.
    pub const fn new(
        name: &'static str,
        condition: fn(&RecommendationInputs) -> bool,
        record: Recommendation,
    ) -> Self {
        Self {
            name,
            condition,
            record,
        }
    }

    /// Whether the rule fires for the given inputs.
    pub fn applies(&self, inputs: &RecommendationInputs) -> bool {
        (self.condition)(inputs)
    }

    /// The record emitted when the rule fires.
    pub const fn record(&self) -> &Recommendation {
        &self.record
    }
}

/// Ordered, open-ended list of recommendation rules.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<RecommendationRule>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            rules: standard_rules(),
        }
    }
}

impl RecommendationEngine {
    /// An engine with no rules; it always returns an empty list.
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: RecommendationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[RecommendationRule] {
        &self.rules
    }

    /// Evaluate every rule in order and collect the records of those that fire.
    pub fn recommend(&self, inputs: &RecommendationInputs) -> Vec<Recommendation> {
        self.rules
            .iter()
            .filter(|rule| {
                let fired = rule.applies(inputs);
                trace!(rule = rule.name, fired, "Recommendation rule evaluated");
                fired
            })
            .map(|rule| rule.record().clone())
            .collect()
    }
}

/// The four standard rules, in evaluation order.
pub fn standard_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule::new(
            "reduce_algorithmic_pressure",
            |m| m.stress_probability > CRITICAL_STRESS,
            Recommendation {
                kind: RecommendationKind::Urgent,
                category: RecommendationCategory::LaborProtection,
                title: String::from("Reduce algorithmic pressure"),
                description: String::from(
                    "Algorithmic pressure is too high; introduce working-time limits and mandatory rest periods.",
                ),
                impact: ImpactLevel::High,
            },
        ),
        RecommendationRule::new(
            "promote_competition",
            |m| m.commission > HIGH_COMMISSION && m.competition < LOW_COMPETITION,
            Recommendation {
                kind: RecommendationKind::Policy,
                category: RecommendationCategory::Antitrust,
                title: String::from("Promote market competition"),
                description: String::from(
                    "Commission is high while competition is weak; consider antitrust measures.",
                ),
                impact: ImpactLevel::Medium,
            },
        ),
        RecommendationRule::new(
            "optimize_allocation",
            |m| m.social_welfare < LOW_WELFARE,
            Recommendation {
                kind: RecommendationKind::Economic,
                category: RecommendationCategory::EfficiencyImprovement,
                title: String::from("Optimize resource allocation"),
                description: String::from(
                    "Total social welfare is low; raise efficiency through technical innovation and institutional reform.",
                ),
                impact: ImpactLevel::High,
            },
        ),
        RecommendationRule::new(
            "guarantee_rider_income",
            |m| m.rider_utility < 0.0,
            Recommendation {
                kind: RecommendationKind::Social,
                category: RecommendationCategory::LaborRights,
                title: String::from("Guarantee rider income"),
                description: String::from(
                    "Rider utility is negative; introduce a minimum income guarantee and social insurance.",
                ),
                impact: ImpactLevel::Critical,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_market() -> RecommendationInputs {
        RecommendationInputs {
            commission: 0.2,
            effective_intensity: 2.5,
            stress_probability: 0.49,
            social_welfare: 12_500.0,
            rider_utility: 1_100.0,
            competition: 0.3,
            regulation: 0.2,
            innovation: 0.6,
        }
    }

    fn kinds(records: &[Recommendation]) -> Vec<RecommendationKind> {
        records.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn calm_market_yields_nothing() {
        let engine = RecommendationEngine::default();
        assert!(engine.recommend(&calm_market()).is_empty());
    }

    #[test]
    fn every_rule_fires_in_fixed_order() {
        let engine = RecommendationEngine::default();
        let inputs = RecommendationInputs {
            commission: 0.4,
            stress_probability: 1.0,
            social_welfare: -6_000.0,
            rider_utility: -6_700.0,
            competition: 0.1,
            ..calm_market()
        };
        let records = engine.recommend(&inputs);
        assert_eq!(
            kinds(&records),
            vec![
                RecommendationKind::Urgent,
                RecommendationKind::Policy,
                RecommendationKind::Economic,
                RecommendationKind::Social,
            ]
        );
        assert_eq!(records[3].impact, ImpactLevel::Critical);
    }

    #[test]
    fn thresholds_are_strict() {
        let engine = RecommendationEngine::default();
        let inputs = RecommendationInputs {
            stress_probability: CRITICAL_STRESS,
            commission: HIGH_COMMISSION,
            social_welfare: LOW_WELFARE,
            rider_utility: 0.0,
            ..calm_market()
        };
        assert!(engine.recommend(&inputs).is_empty());
    }

    #[test]
    fn antitrust_needs_both_conditions() {
        let engine = RecommendationEngine::default();
        let high_commission_competitive = RecommendationInputs {
            commission: 0.3,
            competition: 0.4,
            ..calm_market()
        };
        assert!(engine.recommend(&high_commission_competitive).is_empty());

        let high_commission_concentrated = RecommendationInputs {
            commission: 0.3,
            competition: 0.39,
            ..calm_market()
        };
        assert_eq!(
            kinds(&engine.recommend(&high_commission_concentrated)),
            vec![RecommendationKind::Policy]
        );
    }

    #[test]
    fn raising_stress_adds_urgent_record_without_removing_others() {
        let engine = RecommendationEngine::default();
        let before = RecommendationInputs {
            social_welfare: 5_000.0,
            ..calm_market()
        };
        let after = RecommendationInputs {
            stress_probability: 0.95,
            ..before
        };
        let before_records = engine.recommend(&before);
        let after_records = engine.recommend(&after);
        assert_eq!(kinds(&before_records), vec![RecommendationKind::Economic]);
        assert_eq!(
            kinds(&after_records),
            vec![RecommendationKind::Urgent, RecommendationKind::Economic]
        );
    }

    #[test]
    fn custom_rules_run_after_standard_ones() {
        let extra = RecommendationRule::new(
            "excessive_intensity",
            |m| m.effective_intensity > 4.0,
            Recommendation {
                kind: RecommendationKind::Social,
                category: RecommendationCategory::LaborProtection,
                title: String::from("Limit delivery intensity"),
                description: String::from("Effort levels risk rider safety."),
                impact: ImpactLevel::High,
            },
        );
        let engine = RecommendationEngine::default().with_rule(extra);
        assert_eq!(engine.rules().len(), 5);

        let inputs = RecommendationInputs {
            effective_intensity: 5.0,
            stress_probability: 0.9,
            ..calm_market()
        };
        let records = engine.recommend(&inputs);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, RecommendationKind::Urgent);
        assert_eq!(records[1].title, "Limit delivery intensity");
    }

    #[test]
    fn empty_engine_never_recommends() {
        let engine = RecommendationEngine::empty();
        let inputs = RecommendationInputs {
            stress_probability: 1.0,
            rider_utility: -1.0,
            ..calm_market()
        };
        assert!(engine.recommend(&inputs).is_empty());
    }
}
