//! The equilibrium pipeline.
//!
//! [`EquilibriumEngine::compute`] turns a [`ParameterVector`] into an
//! [`EquilibriumSnapshot`] through a fixed sequence of closed-form stages.
//! Each stage feeds the next:
//!
//! 1. Structural adjustment (competition and macro factors)
//! 2. Effective labor intensity (blend toward the social optimum)
//! 3. Efficiency adjustment (innovation raises it, regulation tempers it)
//! 4. Delivery time (base time plus super-linear congestion)
//! 5. Stress probability
//! 6. Demand (product of six bounded factors)
//! 7. Platform profit
//! 8. Rider utility
//! 9. Consumer surplus
//! 10. Externalities
//! 11. Social welfare
//! 12. Normalized indices
//! 13. Classification labels
//!
//! The floors and ceilings inside the stages are the only protection
//! against degenerate inputs and are kept even where they look redundant
//! for typical values. The engine holds no mutable state: the same inputs
//! always produce the same snapshot, and independent calls may run in
//! parallel.

use policylab_types::{EquilibriumSnapshot, ExternalityBenefits, ExternalityCosts, ParameterVector};
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::constants::EngineConstants;
use crate::error::InvalidParameterError;
use crate::inequality::InequalityAnalyzer;
use crate::labels::{LabelInputs, classify};
use crate::recommendation::{RecommendationEngine, RecommendationInputs};
use crate::validation;

// ---------------------------------------------------------------------------
// Pipeline guards
// ---------------------------------------------------------------------------

/// Magnitude every raw parameter is clamped to before evaluation. Together
/// with the stage guards below it keeps every output finite for any finite
/// input.
pub const INPUT_MAGNITUDE_LIMIT: f64 = 1e3;

/// Floor of the competition factor.
const MIN_COMPETITION_FACTOR: f64 = 0.2;

/// Floor of the macro factor.
const MIN_MACRO_FACTOR: f64 = 0.5;

/// Intensity floor inside the congestion term, which divides by intensity.
/// At zero intensity the congestion time is large but finite.
pub const MIN_CONGESTION_INTENSITY: f64 = 1e-6;

/// Ceiling of the intensity fed to the effort, safety, emission and
/// congestion power terms.
pub const MAX_POWERED_INTENSITY: f64 = 100.0;

/// Bounds of the discounted price before exponentiation. The ceiling is the
/// commission-free price.
const PRICE_BASE_BOUNDS: (f64, f64) = (0.2, 1.0);

/// Bounds of the tolerance-to-delivery-time ratio before exponentiation.
const WAIT_RATIO_BOUNDS: (f64, f64) = (0.2, 1.2);

/// Floor of the efficiency inside the network-effect logarithm.
const MIN_NETWORK_EFFICIENCY: f64 = 0.01;

/// Bounds of the capacity factor.
const CAPACITY_BOUNDS: (f64, f64) = (0.3, 1.2);

/// Floor of the gross-surplus denominator of market efficiency.
const MIN_GROSS_SURPLUS: f64 = 1e-6;

/// Floor of the welfare magnitude in the sustainability ratio.
const MIN_WELFARE_MAGNITUDE: f64 = 1e-6;

/// Welfare at which regulatory effectiveness equals the regulation level.
const REFERENCE_WELFARE: f64 = 20_000.0;

/// Orders one rider can serve before utilization saturates.
const ORDERS_PER_RIDER_CAPACITY: f64 = 120.0;

// ---------------------------------------------------------------------------
// Stage outputs
// ---------------------------------------------------------------------------

/// Structural multipliers of stage 1.
#[derive(Debug, Clone, Copy)]
struct MarketConditions {
    competition_factor: f64,
    macro_factor: f64,
}

/// Per-rider income components shared by the profit and utility stages.
#[derive(Debug, Clone, Copy)]
struct RiderIncome {
    base_income: f64,
    social_benefits: f64,
    wage_subsidy: f64,
}

/// Externality breakdown of stage 10.
#[derive(Debug, Clone, Copy)]
struct Externalities {
    costs: ExternalityCosts,
    benefits: ExternalityBenefits,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Stateless equilibrium calculator over fixed structural constants.
#[derive(Debug, Clone)]
pub struct EquilibriumEngine {
    constants: EngineConstants,
    inequality: InequalityAnalyzer,
    recommendations: RecommendationEngine,
}

impl Default for EquilibriumEngine {
    fn default() -> Self {
        Self::new(EngineConstants::default())
    }
}

impl EquilibriumEngine {
    /// Create an engine with the standard recommendation rules.
    ///
    /// The constants are taken as given; configuration loaded through
    /// [`LabConfig`](crate::config::LabConfig) has already been validated.
    pub fn new(constants: EngineConstants) -> Self {
        let inequality = InequalityAnalyzer::new(constants.riders.count);
        Self {
            constants,
            inequality,
            recommendations: RecommendationEngine::default(),
        }
    }

    /// Validate the constants, then create an engine.
    pub fn try_new(constants: EngineConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Self::new(constants))
    }

    /// Replace the recommendation rules.
    #[must_use]
    pub fn with_recommendations(mut self, recommendations: RecommendationEngine) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Validate the parameters against their documented ranges, then compute.
    pub fn compute_checked(
        &self,
        params: &ParameterVector,
    ) -> Result<EquilibriumSnapshot, InvalidParameterError> {
        if let Err(err) = validation::validate(params) {
            warn!(error = %err, "Parameter vector rejected");
            return Err(err);
        }
        Ok(self.compute(params))
    }

    /// Evaluate the full pipeline for one parameter vector.
    ///
    /// Inputs are not range-checked; see [`compute_checked`](Self::compute_checked).
    /// Finite inputs always give finite outputs: each parameter is first
    /// clamped to [`INPUT_MAGNITUDE_LIMIT`].
    pub fn compute(&self, params: &ParameterVector) -> EquilibriumSnapshot {
        let params = &bounded_inputs(params);
        let conditions = self.market_conditions(params);
        let e_eff = effective_intensity(params);
        let eta_adjusted = self.adjusted_efficiency(params);
        let delivery_time = self.delivery_time(params, e_eff, eta_adjusted);
        let p = self.stress_probability(params, delivery_time);
        let demand = self.demand(params, conditions, e_eff, eta_adjusted, delivery_time);

        let income = self.rider_income(params, eta_adjusted, demand);
        let platform_profit = self.platform_profit(params, demand, income);
        let rider_utility = self.rider_utility(params, e_eff, p, income);
        let consumer_surplus = self.consumer_surplus(params, eta_adjusted, delivery_time, demand);

        let externalities = self.externalities(
            params,
            e_eff,
            eta_adjusted,
            demand,
            platform_profit,
            rider_utility,
            income.wage_subsidy,
        );

        let social_welfare = platform_profit + rider_utility + consumer_surplus
            - externalities.costs.total_externality;

        let gross_surplus = platform_profit + rider_utility + consumer_surplus;
        let market_efficiency =
            (social_welfare / gross_surplus.max(MIN_GROSS_SURPLUS) * 100.0).clamp(0.0, 100.0);
        let gini_coefficient =
            self.inequality
                .gini(platform_profit, rider_utility, consumer_surplus, demand);
        let sustainability_ratio =
            externalities.costs.environmental / social_welfare.abs().max(MIN_WELFARE_MAGNITUDE);
        let sustainability_index = (100.0 - sustainability_ratio * 100.0).clamp(0.0, 100.0);
        let innovation_index = params.innovation * eta_adjusted * 100.0;
        let regulatory_effectiveness =
            params.regulation * (social_welfare / REFERENCE_WELFARE) * 100.0;

        let recommendations = self.recommendations.recommend(&RecommendationInputs {
            commission: params.r,
            effective_intensity: e_eff,
            stress_probability: p,
            social_welfare,
            rider_utility,
            competition: params.competition,
            regulation: params.regulation,
            innovation: params.innovation,
        });

        let labels = classify(&LabelInputs {
            social_welfare,
            rider_utility,
            market_efficiency,
            stress_probability: p,
            competition: params.competition,
            regulation: params.regulation,
            sustainability_index,
        });

        debug!(
            demand,
            platform_profit,
            rider_utility,
            consumer_surplus,
            social_welfare,
            stress_probability = p,
            market_efficiency,
            gini_coefficient,
            recommendation_count = recommendations.len(),
            "Equilibrium computed"
        );

        EquilibriumSnapshot {
            demand,
            platform_profit,
            rider_utility,
            social_welfare,
            consumer_surplus,
            delivery_time,
            stress_probability: p,
            effective_intensity: e_eff,
            market_efficiency,
            gini_coefficient,
            sustainability_index,
            innovation_index,
            regulatory_effectiveness,
            costs: externalities.costs,
            benefits: externalities.benefits,
            recommendations,
            labels,
        }
    }

    // -----------------------------------------------------------------------
    // Stages
    // -----------------------------------------------------------------------

    fn market_conditions(&self, params: &ParameterVector) -> MarketConditions {
        let macro_economy = &self.constants.macro_economy;
        MarketConditions {
            competition_factor: (1.0 - params.competition * self.constants.demand.delta * 0.5)
                .max(MIN_COMPETITION_FACTOR),
            macro_factor: (1.0 + macro_economy.gdp_growth - macro_economy.inflation_rate)
                .max(MIN_MACRO_FACTOR),
        }
    }

    fn adjusted_efficiency(&self, params: &ParameterVector) -> f64 {
        params.eta
            * (1.0 + params.innovation * self.constants.platform.innovation_rate)
            * (1.0 - params.regulation * 0.1)
    }

    fn delivery_time(&self, params: &ParameterVector, e_eff: f64, eta_adjusted: f64) -> f64 {
        let s1 = self.constants.stress.monitoring_sensitivity;
        let e1 = self.constants.externalities.emission_exponent;

        let base_time = params.tau * (1.0 - eta_adjusted) * (1.0 + params.monitoring * s1);
        let intensity = e_eff.clamp(MIN_CONGESTION_INTENSITY, MAX_POWERED_INTENSITY);
        let congestion_time = (5.0 / (0.16 * intensity)) * (1.0 + e1 * (intensity / 3.0).powf(1.5));
        base_time + congestion_time
    }

    fn stress_probability(&self, params: &ParameterVector, delivery_time: f64) -> f64 {
        let stress = &self.constants.stress;
        let overrun = ((delivery_time - params.tau) / params.tau.max(1.0)).max(0.0);
        let monitoring = params.monitoring * stress.monitoring_sensitivity;
        let bias = stress.algo_bias * (1.0 - params.regulation * 0.5);
        (overrun + monitoring + bias).clamp(0.0, 1.0)
    }

    fn demand(
        &self,
        params: &ParameterVector,
        conditions: MarketConditions,
        e_eff: f64,
        eta_adjusted: f64,
        delivery_time: f64,
    ) -> f64 {
        let demand = &self.constants.demand;

        let price_factor = (1.0 - params.r * demand.price_sensitivity)
            .clamp(PRICE_BASE_BOUNDS.0, PRICE_BASE_BOUNDS.1)
            .powf(demand.alpha);
        let wait_factor = (params.tau / delivery_time.max(1.0))
            .clamp(WAIT_RATIO_BOUNDS.0, WAIT_RATIO_BOUNDS.1)
            .powf(demand.quality_preference);
        let network_effect =
            1.0 + demand.loyalty_factor * eta_adjusted.max(MIN_NETWORK_EFFICIENCY).ln_1p();
        let capacity_factor =
            (eta_adjusted * e_eff / 3.0).clamp(CAPACITY_BOUNDS.0, CAPACITY_BOUNDS.1);

        demand.market_size
            * price_factor
            * wait_factor
            * network_effect
            * conditions.competition_factor
            * conditions.macro_factor
            * capacity_factor
    }

    fn rider_income(&self, params: &ParameterVector, eta_adjusted: f64, demand: f64) -> RiderIncome {
        let orders_per_rider = eta_adjusted * demand / self.constants.rider_count();
        let base_income = (1.0 - params.r)
            * self.constants.platform.order_price
            * orders_per_rider
            * self.constants.riders.income_factor;
        let policy = &self.constants.policy;
        RiderIncome {
            base_income,
            social_benefits: params.regulation * policy.social_insurance * base_income,
            // Only tops up riders earning below the minimum wage.
            wage_subsidy: (policy.min_wage - base_income).max(0.0) * params.regulation,
        }
    }

    fn platform_profit(&self, params: &ParameterVector, demand: f64, income: RiderIncome) -> f64 {
        let platform = &self.constants.platform;

        let revenue = demand * params.r * platform.order_price;
        let variable_costs = demand * platform.ops_cost;
        let fixed_costs = platform.tech_cost + platform.marketing_cost * (1.0 - params.innovation * 0.2);
        let tax_burden =
            ((revenue - variable_costs - fixed_costs) * self.constants.policy.tax_rate).max(0.0);
        let data_revenue = demand * platform.data_value * (1.0 - params.regulation * 0.3);
        let employer_social_cost = income.social_benefits * self.constants.rider_count();

        revenue + data_revenue - variable_costs - fixed_costs - tax_burden - employer_social_cost
    }

    fn rider_utility(
        &self,
        params: &ParameterVector,
        e_eff: f64,
        p: f64,
        income: RiderIncome,
    ) -> f64 {
        let riders = &self.constants.riders;
        let intensity = e_eff.clamp(0.0, MAX_POWERED_INTENSITY);

        let physical_cost = riders.physical_cost * intensity.powi(2);
        let stress_cost =
            self.constants.stress.base_cost * p.powf(1.5) * (1.0 + params.monitoring * 0.3);
        let training_cost = riders.training_cost * params.innovation;
        let safety_risk_cost = riders.safety_cost * intensity.powf(1.8);

        let per_rider = income.base_income + income.social_benefits + income.wage_subsidy
            - physical_cost
            - stress_cost
            - training_cost
            - safety_risk_cost;
        per_rider * self.constants.rider_count()
    }

    fn consumer_surplus(
        &self,
        params: &ParameterVector,
        eta_adjusted: f64,
        delivery_time: f64,
        demand: f64,
    ) -> f64 {
        let order_price = self.constants.platform.order_price;

        let privacy_cost =
            self.constants.externalities.privacy_cost * (1.0 - params.regulation * 0.4);
        let perceived_price = order_price * (1.0 + params.r * 0.6);
        let reservation_price =
            order_price * (1.0 + self.constants.demand.quality_preference * eta_adjusted);
        let price_surplus = (reservation_price - perceived_price).max(0.0);
        let wait_bonus = (params.tau - delivery_time).max(0.0) * 0.5;
        let overrun = ((delivery_time - params.tau) / params.tau.max(1.0)).max(0.0);
        let experience_penalty = privacy_cost + overrun * 12.0;

        ((price_surplus + wait_bonus - experience_penalty) * (demand / 100.0)).max(0.0)
    }

    #[allow(clippy::too_many_arguments)]
    fn externalities(
        &self,
        params: &ParameterVector,
        e_eff: f64,
        eta_adjusted: f64,
        demand: f64,
        platform_profit: f64,
        rider_utility: f64,
        wage_subsidy: f64,
    ) -> Externalities {
        let externalities = &self.constants.externalities;
        let rider_count = self.constants.rider_count();
        let algo_bias = self.constants.stress.algo_bias;

        let environmental = externalities.emission_scale
            * e_eff
                .clamp(0.0, MAX_POWERED_INTENSITY)
                .powf(externalities.emission_exponent);
        let traffic = 2.5 * (demand / 1000.0).powf(1.3);
        let inequality =
            5.0 * (platform_profit / 1000.0 - rider_utility / 1000.0).max(0.0).powf(1.2);
        let algorithmic_bias = algo_bias * demand * (1.0 - params.regulation * 0.6);
        let subsidy = wage_subsidy * rider_count;

        let utilization =
            (eta_adjusted * demand / (rider_count * ORDERS_PER_RIDER_CAPACITY)).min(1.0);
        let employment =
            rider_count * utilization * 8.0 * (1.0 - self.constants.macro_economy.unemployment_rate);
        let innovation_spillover = params.innovation * demand * 0.02;
        let digitalization = eta_adjusted * demand * 0.015;

        let total_externality = environmental + traffic + inequality + algorithmic_bias + subsidy
            - employment
            - innovation_spillover
            - digitalization;

        Externalities {
            costs: ExternalityCosts {
                environmental,
                traffic,
                inequality,
                algorithmic_bias,
                wage_subsidy: subsidy,
                total_externality,
            },
            benefits: ExternalityBenefits {
                employment,
                innovation_spillover,
                digitalization,
            },
        }
    }
}

/// Clamp every parameter to `[-INPUT_MAGNITUDE_LIMIT, INPUT_MAGNITUDE_LIMIT]`.
fn bounded_inputs(params: &ParameterVector) -> ParameterVector {
    let bound = |value: f64| value.clamp(-INPUT_MAGNITUDE_LIMIT, INPUT_MAGNITUDE_LIMIT);
    ParameterVector::new(
        bound(params.r),
        bound(params.e),
        bound(params.eta),
        bound(params.tau),
        bound(params.lambda),
    )
    .with_monitoring(bound(params.monitoring))
    .with_competition(bound(params.competition))
    .with_regulation(bound(params.regulation))
    .with_innovation(bound(params.innovation))
}

/// Labor intensity blended toward a regulation-discounted social optimum.
fn effective_intensity(params: &ParameterVector) -> f64 {
    let social_optimum = params.e * (0.75 - params.regulation * 0.2);
    (1.0 - params.lambda) * params.e + params.lambda * social_optimum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> EquilibriumEngine {
        EquilibriumEngine::default()
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} +/- {tolerance}, got {actual}"
        );
    }

    #[test]
    fn effective_intensity_is_raw_without_blending() {
        let params = ParameterVector::default();
        assert_close(effective_intensity(&params), 2.5, 1e-12);
    }

    #[test]
    fn full_blending_reaches_social_optimum() {
        let params = ParameterVector {
            lambda: 1.0,
            regulation: 0.5,
            ..ParameterVector::default()
        };
        // 2.5 * (0.75 - 0.1)
        assert_close(effective_intensity(&params), 1.625, 1e-12);
    }

    #[test]
    fn adjusted_efficiency_combines_innovation_and_regulation() {
        let params = ParameterVector::default();
        // 0.85 * (1 + 0.6 * 0.02) * (1 - 0.02)
        assert_close(engine().adjusted_efficiency(&params), 0.842_996, 1e-9);
    }

    #[test]
    fn competition_factor_is_floored() {
        let mut constants = EngineConstants::default();
        constants.demand.delta = 5.0;
        let engine = EquilibriumEngine::new(constants);
        let params = ParameterVector::default().with_competition(1.0);
        let conditions = engine.market_conditions(&params);
        assert_close(conditions.competition_factor, MIN_COMPETITION_FACTOR, 1e-12);
        assert_close(conditions.macro_factor, 1.03, 1e-12);
    }

    #[test]
    fn baseline_delivery_time_and_stress() {
        let engine = engine();
        let params = ParameterVector::default();
        let eta_adjusted = engine.adjusted_efficiency(&params);
        let time = engine.delivery_time(&params, 2.5, eta_adjusted);
        assert_close(time, 38.8366, 1e-3);
        assert_close(engine.stress_probability(&params, time), 0.48955, 1e-4);
    }

    #[test]
    fn zero_intensity_gives_finite_delivery_time() {
        let engine = engine();
        let time = engine.delivery_time(&ParameterVector::default(), 0.0, 0.8);
        assert!(time.is_finite());
        assert!(time > 1_000_000.0);
    }

    #[test]
    fn huge_intensity_keeps_delivery_time_finite() {
        let engine = engine();
        let time = engine.delivery_time(&ParameterVector::default(), 1e160, 0.8);
        assert!(time.is_finite());
    }

    #[test]
    fn inputs_are_clamped_to_magnitude_limit() {
        let params = ParameterVector::new(-1e200, 1e160, 0.85, 30.0, 0.0).with_monitoring(-1e300);
        let bounded = bounded_inputs(&params);
        assert_close(bounded.r, -INPUT_MAGNITUDE_LIMIT, 0.0);
        assert_close(bounded.e, INPUT_MAGNITUDE_LIMIT, 0.0);
        assert_close(bounded.monitoring, -INPUT_MAGNITUDE_LIMIT, 0.0);
        assert_close(bounded.eta, 0.85, 0.0);
    }

    #[test]
    fn negative_commission_does_not_inflate_demand() {
        let engine = engine();
        let free = engine.compute(&ParameterVector {
            r: 0.0,
            ..ParameterVector::default()
        });
        let subsidised = engine.compute(&ParameterVector {
            r: -1e200,
            ..ParameterVector::default()
        });
        assert_close(subsidised.demand, free.demand, 1e-9);
        assert!(subsidised.platform_profit.is_finite());
        assert!(subsidised.social_welfare.is_finite());
    }

    #[test]
    fn negative_monitoring_keeps_stress_in_unit_interval() {
        let engine = engine();
        let params = ParameterVector::default().with_monitoring(-50.0);
        assert_close(engine.stress_probability(&params, 10.0), 0.0, 0.0);
    }

    #[test]
    fn stress_probability_is_capped_at_one() {
        let engine = engine();
        let params = ParameterVector::default().with_monitoring(1.0);
        assert_close(engine.stress_probability(&params, 500.0), 1.0, 1e-12);
    }

    #[test]
    fn wage_subsidy_only_below_minimum_wage() {
        let engine = engine();
        let params = ParameterVector::default().with_regulation(0.5);
        let above = engine.rider_income(&params, 0.85, 3500.0);
        assert!(above.base_income > 15.0);
        assert_close(above.wage_subsidy, 0.0, 1e-12);

        let below = engine.rider_income(&params, 0.85, 100.0);
        assert!(below.base_income < 15.0);
        assert_close(below.wage_subsidy, (15.0 - below.base_income) * 0.5, 1e-12);
    }

    #[test]
    fn tax_is_not_charged_on_losses() {
        let engine = engine();
        let params = ParameterVector::default();
        let income = engine.rider_income(&params, 0.85, 10.0);
        let profit = engine.platform_profit(&params, 10.0, income);
        // revenue 70 + data 1.41 - ops 25 - fixed 1856 - social 0.21, no tax.
        assert_close(profit, -1809.79, 1e-4);
    }

    #[test]
    fn consumer_surplus_never_negative() {
        let engine = engine();
        let params = ParameterVector::default();
        assert_close(engine.consumer_surplus(&params, 0.1, 200.0, 3000.0), 0.0, 1e-12);
    }

    #[test]
    fn subsidy_counts_toward_total_externality() {
        let engine = engine();
        let params = ParameterVector::default();
        let without = engine.externalities(&params, 2.5, 0.84, 3500.0, 10_000.0, 1_000.0, 0.0);
        let with = engine.externalities(&params, 2.5, 0.84, 3500.0, 10_000.0, 1_000.0, 2.0);
        assert_close(with.costs.wage_subsidy, 200.0, 1e-9);
        assert_close(
            with.costs.total_externality - without.costs.total_externality,
            200.0,
            1e-9,
        );
    }

    #[test]
    fn checked_path_rejects_out_of_range_input() {
        let params = ParameterVector {
            r: 1.5,
            ..ParameterVector::default()
        };
        assert!(engine().compute_checked(&params).is_err());
    }

    #[test]
    fn checked_path_matches_unchecked_for_valid_input() {
        let engine = engine();
        let params = ParameterVector::default();
        let checked = engine.compute_checked(&params);
        assert_eq!(checked.ok(), Some(engine.compute(&params)));
    }

    #[test]
    fn replaced_rules_append_to_snapshot_recommendations() {
        use policylab_types::{
            ImpactLevel, Recommendation, RecommendationCategory, RecommendationKind,
        };

        use crate::recommendation::RecommendationRule;

        let rule = RecommendationRule::new(
            "cap_working_hours",
            |m| m.effective_intensity > 3.0,
            Recommendation {
                kind: RecommendationKind::Social,
                category: RecommendationCategory::LaborProtection,
                title: String::from("Cap working hours"),
                description: String::from("Effective intensity exceeds a sustainable shift."),
                impact: ImpactLevel::Medium,
            },
        );
        let engine = EquilibriumEngine::default()
            .with_recommendations(RecommendationEngine::default().with_rule(rule.clone()));

        let params = ParameterVector::new(0.4, 5.0, 0.3, 10.0, 0.0)
            .with_monitoring(1.0)
            .with_competition(0.1)
            .with_regulation(0.0)
            .with_innovation(0.0);
        let snapshot = engine.compute(&params);
        let kinds: Vec<RecommendationKind> =
            snapshot.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::Urgent,
                RecommendationKind::Policy,
                RecommendationKind::Economic,
                RecommendationKind::Social,
                RecommendationKind::Social,
            ]
        );
        assert_eq!(snapshot.recommendations.last(), Some(rule.record()));

        let calm = engine.compute(&ParameterVector::default());
        assert!(calm.recommendations.is_empty());
    }

    #[test]
    fn try_new_rejects_invalid_constants() {
        let mut constants = EngineConstants::default();
        constants.riders.count = 0;
        assert!(EquilibriumEngine::try_new(constants).is_err());
    }
}
