//! Snapshot metrics that can be tracked across a history.

use policylab_types::EquilibriumSnapshot;
use serde::{Deserialize, Serialize};

/// A scalar metric read out of an [`EquilibriumSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Order demand `D`.
    Demand,
    /// Platform profit `P`.
    PlatformProfit,
    /// Aggregate rider utility `Ur`.
    RiderUtility,
    /// Social welfare `SW`.
    SocialWelfare,
    /// Consumer surplus `CS`.
    ConsumerSurplus,
    /// Market efficiency index.
    MarketEfficiency,
    /// Gini coefficient.
    GiniCoefficient,
    /// Sustainability index.
    SustainabilityIndex,
    /// Algorithmic stress probability `p`.
    StressProbability,
}

impl Metric {
    /// Metrics in export column order.
    pub const ALL: [Self; 9] = [
        Self::Demand,
        Self::PlatformProfit,
        Self::RiderUtility,
        Self::SocialWelfare,
        Self::ConsumerSurplus,
        Self::MarketEfficiency,
        Self::GiniCoefficient,
        Self::SustainabilityIndex,
        Self::StressProbability,
    ];

    /// Column name used in tabular exports.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Demand => "D",
            Self::PlatformProfit => "P",
            Self::RiderUtility => "Ur",
            Self::SocialWelfare => "SW",
            Self::ConsumerSurplus => "CS",
            Self::MarketEfficiency => "market_efficiency",
            Self::GiniCoefficient => "gini_coefficient",
            Self::SustainabilityIndex => "sustainability_index",
            Self::StressProbability => "stress_probability",
        }
    }

    /// Decimal places used when exporting the metric.
    ///
    /// Probabilities and the Gini coefficient keep four places; everything
    /// else is money-like and keeps two.
    pub const fn precision(self) -> usize {
        match self {
            Self::GiniCoefficient | Self::StressProbability => 4,
            _ => 2,
        }
    }

    /// Read the metric from a snapshot.
    pub const fn read(self, snapshot: &EquilibriumSnapshot) -> f64 {
        match self {
            Self::Demand => snapshot.demand,
            Self::PlatformProfit => snapshot.platform_profit,
            Self::RiderUtility => snapshot.rider_utility,
            Self::SocialWelfare => snapshot.social_welfare,
            Self::ConsumerSurplus => snapshot.consumer_surplus,
            Self::MarketEfficiency => snapshot.market_efficiency,
            Self::GiniCoefficient => snapshot.gini_coefficient,
            Self::SustainabilityIndex => snapshot.sustainability_index,
            Self::StressProbability => snapshot.stress_probability,
        }
    }
}

impl core::fmt::Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.column())
    }
}
