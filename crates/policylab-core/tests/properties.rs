//! Property tests over the documented parameter ranges, and over
//! arbitrary finite inputs on the unchecked path.

#![allow(clippy::indexing_slicing)]

use policylab_core::{EquilibriumEngine, validation};
use policylab_types::{EquilibriumSnapshot, ParameterVector, RecommendationKind};
use proptest::prelude::*;

fn documented_params() -> impl Strategy<Value = ParameterVector> {
    (
        (0.0..0.99_f64, 0.1..5.0_f64, 0.05..=1.0_f64, 1.0..120.0_f64),
        (0.0..=1.0_f64, 0.0..=1.0_f64, 0.0..=1.0_f64, 0.0..=1.0_f64, 0.0..=1.0_f64),
    )
        .prop_map(
            |((r, e, eta, tau), (lambda, monitoring, competition, regulation, innovation))| {
                ParameterVector::new(r, e, eta, tau, lambda)
                    .with_monitoring(monitoring)
                    .with_competition(competition)
                    .with_regulation(regulation)
                    .with_innovation(innovation)
            },
        )
}

/// Any finite value, from subnormal to `f64::MAX`, plus ordinary magnitudes.
fn finite_value() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    prop_oneof![
        POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO,
        -10.0..10.0_f64,
    ]
}

fn finite_params() -> impl Strategy<Value = ParameterVector> {
    (
        (finite_value(), finite_value(), finite_value(), finite_value()),
        (finite_value(), finite_value(), finite_value(), finite_value(), finite_value()),
    )
        .prop_map(
            |((r, e, eta, tau), (lambda, monitoring, competition, regulation, innovation))| {
                ParameterVector::new(r, e, eta, tau, lambda)
                    .with_monitoring(monitoring)
                    .with_competition(competition)
                    .with_regulation(regulation)
                    .with_innovation(innovation)
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn bounded_metrics_stay_in_range(params in documented_params()) {
        let snapshot = EquilibriumEngine::default().compute(&params);

        prop_assert!((0.0..=1.0).contains(&snapshot.stress_probability));
        prop_assert!((0.0..=1.0).contains(&snapshot.gini_coefficient));
        prop_assert!((0.0..=100.0).contains(&snapshot.market_efficiency));
        prop_assert!((0.0..=100.0).contains(&snapshot.sustainability_index));
        prop_assert!(snapshot.consumer_surplus >= 0.0);
        prop_assert!(snapshot.demand > 0.0);
    }

    #[test]
    fn headline_figures_are_finite(params in documented_params()) {
        let snapshot = EquilibriumEngine::default().compute(&params);

        for value in [
            snapshot.demand,
            snapshot.platform_profit,
            snapshot.rider_utility,
            snapshot.consumer_surplus,
            snapshot.social_welfare,
            snapshot.delivery_time,
            snapshot.costs.total_externality,
        ] {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn any_finite_input_gives_finite_headline_figures(params in finite_params()) {
        let snapshot = EquilibriumEngine::default().compute(&params);

        for value in [
            snapshot.demand,
            snapshot.platform_profit,
            snapshot.rider_utility,
            snapshot.consumer_surplus,
            snapshot.social_welfare,
        ] {
            prop_assert!(value.is_finite(), "{params:?} -> {value}");
        }
        prop_assert!((0.0..=1.0).contains(&snapshot.stress_probability));
        prop_assert!((0.0..=100.0).contains(&snapshot.market_efficiency));
        prop_assert!((0.0..=100.0).contains(&snapshot.sustainability_index));
    }

    #[test]
    fn documented_inputs_pass_validation(params in documented_params()) {
        prop_assert!(validation::validate(&params).is_ok());
        let checked = EquilibriumEngine::default().compute_checked(&params);
        prop_assert!(checked.is_ok());
    }

    #[test]
    fn evaluation_is_deterministic(params in documented_params()) {
        let engine = EquilibriumEngine::default();
        prop_assert_eq!(engine.compute(&params), engine.compute(&params));
    }

    #[test]
    fn recommendations_keep_canonical_order(params in documented_params()) {
        let snapshot = EquilibriumEngine::default().compute(&params);
        prop_assert!(
            snapshot
                .recommendations
                .windows(2)
                .all(|pair| pair[0].kind < pair[1].kind)
        );
    }

    #[test]
    fn high_commission_in_thin_market_adds_antitrust_advice(
        params in documented_params(),
        lower in 0.0..=0.25_f64,
        upper in 0.2501..0.99_f64,
        competition in 0.0..0.4_f64,
    ) {
        let engine = EquilibriumEngine::default();
        let low = engine.compute(&ParameterVector { r: lower, competition, ..params });
        let high = engine.compute(&ParameterVector { r: upper, competition, ..params });

        let has_policy = |snap: &EquilibriumSnapshot| {
            snap.recommendations.iter().any(|rec| rec.kind == RecommendationKind::Policy)
        };
        prop_assert!(!has_policy(&low));
        prop_assert!(has_policy(&high));
    }
}
