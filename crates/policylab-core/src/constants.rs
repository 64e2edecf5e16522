//! Structural constants of the platform economy.
//!
//! These coefficients are fixed for the lifetime of an engine: market
//! size, elasticities, unit costs, the rider population, tax and wage
//! policy, and macro indicators. They are grouped the way they appear in
//! the `constants` section of `policylab-config.yaml`; every field has a
//! default matching the documented calibration.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Every structural coefficient used by the equilibrium pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConstants {
    /// Market size and consumer response.
    pub demand: DemandConstants,
    /// Platform prices and costs.
    pub platform: PlatformConstants,
    /// Rider population, income and effort costs.
    pub riders: RiderConstants,
    /// Algorithmic stress model.
    pub stress: StressConstants,
    /// Environmental and privacy coefficients.
    pub externalities: ExternalityConstants,
    /// Tax, wage floor and social insurance.
    pub policy: PolicyConstants,
    /// Macroeconomic backdrop.
    pub macro_economy: MacroConstants,
}

impl EngineConstants {
    /// Reject coefficients that would break the pipeline's guards.
    ///
    /// The engine divides by the rider count and the order price, and
    /// every coefficient feeds a product, so each must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64); 28] = [
            ("demand.market_size", self.demand.market_size),
            ("demand.alpha", self.demand.alpha),
            ("demand.delta", self.demand.delta),
            ("demand.price_sensitivity", self.demand.price_sensitivity),
            ("demand.quality_preference", self.demand.quality_preference),
            ("demand.loyalty_factor", self.demand.loyalty_factor),
            ("platform.order_price", self.platform.order_price),
            ("platform.ops_cost", self.platform.ops_cost),
            ("platform.tech_cost", self.platform.tech_cost),
            ("platform.marketing_cost", self.platform.marketing_cost),
            ("platform.data_value", self.platform.data_value),
            ("platform.innovation_rate", self.platform.innovation_rate),
            ("riders.income_factor", self.riders.income_factor),
            ("riders.physical_cost", self.riders.physical_cost),
            ("riders.training_cost", self.riders.training_cost),
            ("riders.safety_cost", self.riders.safety_cost),
            ("stress.base_cost", self.stress.base_cost),
            ("stress.monitoring_sensitivity", self.stress.monitoring_sensitivity),
            ("stress.algo_bias", self.stress.algo_bias),
            ("externalities.emission_scale", self.externalities.emission_scale),
            ("externalities.emission_exponent", self.externalities.emission_exponent),
            ("externalities.privacy_cost", self.externalities.privacy_cost),
            ("policy.tax_rate", self.policy.tax_rate),
            ("policy.min_wage", self.policy.min_wage),
            ("policy.social_insurance", self.policy.social_insurance),
            ("macro_economy.gdp_growth", self.macro_economy.gdp_growth),
            ("macro_economy.inflation_rate", self.macro_economy.inflation_rate),
            ("macro_economy.unemployment_rate", self.macro_economy.unemployment_rate),
        ];

        for (field, value) in checks {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }

        if self.riders.count == 0 {
            return Err(ConfigError::Invalid {
                field: "riders.count",
                reason: String::from("rider population must be at least 1"),
            });
        }
        if self.platform.order_price <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "platform.order_price",
                reason: format!("must be positive, got {}", self.platform.order_price),
            });
        }
        if self.demand.market_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "demand.market_size",
                reason: format!("must be positive, got {}", self.demand.market_size),
            });
        }
        Ok(())
    }

    /// Rider population as a float, for use in the pipeline arithmetic.
    pub fn rider_count(&self) -> f64 {
        f64::from(self.riders.count)
    }
}

/// Market size and consumer response coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandConstants {
    /// Base market size `A` in orders.
    pub market_size: f64,
    /// Price elasticity exponent `alpha`.
    pub alpha: f64,
    /// Competition elasticity `delta`.
    pub delta: f64,
    /// How strongly the commission depresses the consumer price factor.
    pub price_sensitivity: f64,
    /// Exponent on the wait ratio; also raises the reservation price.
    pub quality_preference: f64,
    /// Weight of the log network effect.
    pub loyalty_factor: f64,
}

impl Default for DemandConstants {
    fn default() -> Self {
        Self {
            market_size: 14_000.0,
            alpha: 2.0,
            delta: 1.2,
            price_sensitivity: 1.8,
            quality_preference: 0.7,
            loyalty_factor: 0.4,
        }
    }
}

/// Platform price and cost coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConstants {
    /// Average order price `P_order`.
    pub order_price: f64,
    /// Operating cost per order `C_ops`.
    pub ops_cost: f64,
    /// Fixed technology spend `C_tech`.
    pub tech_cost: f64,
    /// Fixed marketing spend `C_marketing`, discounted by innovation.
    pub marketing_cost: f64,
    /// Data monetization value per order.
    pub data_value: f64,
    /// Efficiency gain per unit of innovation.
    pub innovation_rate: f64,
}

impl Default for PlatformConstants {
    fn default() -> Self {
        Self {
            order_price: 35.0,
            ops_cost: 2.5,
            tech_cost: 800.0,
            marketing_cost: 1200.0,
            data_value: 0.15,
            innovation_rate: 0.02,
        }
    }
}

/// Rider population and effort cost coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiderConstants {
    /// Rider population `R_count`.
    pub count: u32,
    /// Share of order value that reaches the rider as income.
    pub income_factor: f64,
    /// Physical effort cost coefficient `c1` (quadratic in intensity).
    pub physical_cost: f64,
    /// Training cost coefficient `c2` (linear in innovation).
    pub training_cost: f64,
    /// Safety risk coefficient (power 1.8 in intensity).
    pub safety_cost: f64,
}

impl Default for RiderConstants {
    fn default() -> Self {
        Self {
            count: 100,
            income_factor: 0.035,
            physical_cost: 1.5,
            training_cost: 0.8,
            safety_cost: 0.8,
        }
    }
}

/// Algorithmic stress coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConstants {
    /// Stress cost scale `s0`.
    pub base_cost: f64,
    /// Monitoring sensitivity `s1`.
    pub monitoring_sensitivity: f64,
    /// Baseline algorithmic bias.
    pub algo_bias: f64,
}

impl Default for StressConstants {
    fn default() -> Self {
        Self {
            base_cost: 12.0,
            monitoring_sensitivity: 0.3,
            algo_bias: 0.05,
        }
    }
}

/// Environmental and privacy coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalityConstants {
    /// Emission cost scale `e0`.
    pub emission_scale: f64,
    /// Emission exponent `e1`; also the congestion elasticity.
    pub emission_exponent: f64,
    /// Per-order privacy cost borne by consumers.
    pub privacy_cost: f64,
}

impl Default for ExternalityConstants {
    fn default() -> Self {
        Self {
            emission_scale: 6.0,
            emission_exponent: 2.2,
            privacy_cost: 0.08,
        }
    }
}

/// Tax, wage floor and social insurance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConstants {
    /// Corporate tax rate on positive net margin.
    pub tax_rate: f64,
    /// Per-rider minimum wage.
    pub min_wage: f64,
    /// Social insurance contribution rate.
    pub social_insurance: f64,
}

impl Default for PolicyConstants {
    fn default() -> Self {
        Self {
            tax_rate: 0.25,
            min_wage: 15.0,
            social_insurance: 0.12,
        }
    }
}

/// Macroeconomic indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroConstants {
    /// Real GDP growth rate.
    pub gdp_growth: f64,
    /// Inflation rate.
    pub inflation_rate: f64,
    /// Unemployment rate.
    pub unemployment_rate: f64,
}

impl Default for MacroConstants {
    fn default() -> Self {
        Self {
            gdp_growth: 0.06,
            inflation_rate: 0.03,
            unemployment_rate: 0.05,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert!(EngineConstants::default().validate().is_ok());
    }

    #[test]
    fn zero_riders_rejected() {
        let mut constants = EngineConstants::default();
        constants.riders.count = 0;
        let err = constants.validate();
        assert!(matches!(
            err,
            Err(ConfigError::Invalid {
                field: "riders.count",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_coefficient_rejected() {
        let mut constants = EngineConstants::default();
        constants.stress.algo_bias = f64::NAN;
        let err = constants.validate();
        assert!(matches!(
            err,
            Err(ConfigError::Invalid {
                field: "stress.algo_bias",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_order_price_rejected() {
        let mut constants = EngineConstants::default();
        constants.platform.order_price = 0.0;
        assert!(constants.validate().is_err());
    }

    #[test]
    fn rider_count_converts_to_float() {
        let constants = EngineConstants::default();
        assert!((constants.rider_count() - 100.0).abs() < f64::EPSILON);
    }
}
