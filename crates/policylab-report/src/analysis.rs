//! Historical analysis of a snapshot history.

use serde::{Deserialize, Serialize};

use crate::history::SnapshotHistory;
use crate::metric::Metric;
use crate::stats::SeriesStats;

/// Direction of a trend ratio, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// More than +5%.
    RisingSharply,
    /// Above 0% up to +5%.
    Rising,
    /// Above -5% up to 0%.
    Stable,
    /// -5% or lower.
    Falling,
}

impl TrendDirection {
    /// Classify a trend ratio.
    pub fn classify(trend: f64) -> Self {
        if trend > 5.0 {
            Self::RisingSharply
        } else if trend > 0.0 {
            Self::Rising
        } else if trend > -5.0 {
            Self::Stable
        } else {
            Self::Falling
        }
    }

    /// Short human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::RisingSharply => "rising sharply",
            Self::Rising => "rising moderately",
            Self::Stable => "broadly stable",
            Self::Falling => "falling, needs attention",
        }
    }
}

impl core::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.description())
    }
}

/// Trend ratios of the headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricTrends {
    /// Platform profit trend, percent.
    pub profit: f64,
    /// Social welfare trend, percent.
    pub welfare: f64,
    /// Rider utility trend, percent.
    pub rider_utility: f64,
}

/// Summary of everything recorded in a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAnalysis {
    /// Number of entries analysed.
    pub samples: usize,
    /// Window used for the trend ratios.
    pub trend_window: usize,
    /// Platform profit.
    pub profit: SeriesStats,
    /// Social welfare.
    pub welfare: SeriesStats,
    /// Rider utility.
    pub rider_utility: SeriesStats,
    /// Market efficiency.
    pub efficiency: SeriesStats,
    /// Gini coefficient.
    pub gini: SeriesStats,
    /// Sustainability index.
    pub sustainability: SeriesStats,
    /// Trend ratios.
    pub trends: MetricTrends,
    /// Direction of the consumer surplus trend.
    pub consumer_surplus_direction: TrendDirection,
    /// Data-quality score in percent.
    pub data_quality: u8,
}

impl HistoryAnalysis {
    /// Analyse a history; `None` when it holds no entries.
    pub fn from_history(history: &SnapshotHistory, window: usize) -> Option<Self> {
        let stats = |metric| history.stats(metric);
        let trends = MetricTrends {
            profit: history.trend(Metric::PlatformProfit, window),
            welfare: history.trend(Metric::SocialWelfare, window),
            rider_utility: history.trend(Metric::RiderUtility, window),
        };

        Some(Self {
            samples: history.len(),
            trend_window: window,
            profit: stats(Metric::PlatformProfit)?,
            welfare: stats(Metric::SocialWelfare)?,
            rider_utility: stats(Metric::RiderUtility)?,
            efficiency: stats(Metric::MarketEfficiency)?,
            gini: stats(Metric::GiniCoefficient)?,
            sustainability: stats(Metric::SustainabilityIndex)?,
            trends,
            consumer_surplus_direction: TrendDirection::classify(
                history.trend(Metric::ConsumerSurplus, window),
            ),
            data_quality: data_quality(history.len()),
        })
    }

    /// Direction of the welfare trend.
    pub fn welfare_direction(&self) -> TrendDirection {
        TrendDirection::classify(self.trends.welfare)
    }
}

/// Data-quality score for a sample count: 60 below 5, 80 below 15, else 95.
pub const fn data_quality(samples: usize) -> u8 {
    if samples < 5 {
        60
    } else if samples < 15 {
        80
    } else {
        95
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_thresholds_are_strict() {
        assert_eq!(TrendDirection::classify(5.1), TrendDirection::RisingSharply);
        assert_eq!(TrendDirection::classify(5.0), TrendDirection::Rising);
        assert_eq!(TrendDirection::classify(0.0), TrendDirection::Stable);
        assert_eq!(TrendDirection::classify(-5.0), TrendDirection::Falling);
        assert_eq!(TrendDirection::classify(-4.9), TrendDirection::Stable);
    }

    #[test]
    fn data_quality_tiers() {
        assert_eq!(data_quality(0), 60);
        assert_eq!(data_quality(4), 60);
        assert_eq!(data_quality(5), 80);
        assert_eq!(data_quality(14), 80);
        assert_eq!(data_quality(15), 95);
        assert_eq!(data_quality(30), 95);
    }

    #[test]
    fn empty_history_has_no_analysis() {
        assert_eq!(HistoryAnalysis::from_history(&SnapshotHistory::default(), 5), None);
    }
}
