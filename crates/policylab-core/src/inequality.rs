//! Three-group Gini estimate over platform, riders and consumers.
//!
//! The income distribution is approximated by three classes: the platform
//! (one entity receiving the profit), the rider population sharing the
//! aggregate rider utility, and the consumers (one per order) sharing the
//! consumer surplus. The Lorenz curve through those three points is
//! integrated with the trapezoid rule.
//!
//! With a single platform entity against hundreds of riders and thousands
//! of consumers, the estimate is dominated by the platform's per-capita
//! income and runs close to 1 for most market states. It is a coarse
//! indicator, not a rigorous inequality measure.

/// Value returned when there is no income or no population to measure.
pub const DEGENERATE_GINI: f64 = 1.0;

/// One population class in the Lorenz approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeGroup {
    /// Total income of the class, floored at zero.
    pub income: f64,
    /// Number of members in the class.
    pub population: f64,
}

impl IncomeGroup {
    fn per_capita(&self) -> f64 {
        self.income / self.population
    }
}

/// Computes the Gini coefficient for a fixed rider population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InequalityAnalyzer {
    rider_count: u32,
}

impl InequalityAnalyzer {
    /// Create an analyzer for the given rider population.
    pub const fn new(rider_count: u32) -> Self {
        Self { rider_count }
    }

    /// The three income classes for a market state.
    ///
    /// Negative incomes are floored at zero; the consumer population is the
    /// rounded demand, at least one.
    pub fn groups(
        &self,
        platform_profit: f64,
        rider_utility: f64,
        consumer_surplus: f64,
        demand: f64,
    ) -> [IncomeGroup; 3] {
        [
            IncomeGroup {
                income: platform_profit.max(0.0),
                population: 1.0,
            },
            IncomeGroup {
                income: rider_utility.max(0.0),
                population: f64::from(self.rider_count),
            },
            IncomeGroup {
                income: consumer_surplus.max(0.0),
                population: demand.round().max(1.0),
            },
        ]
    }

    /// Gini coefficient in `[0, 1]`.
    ///
    /// Returns [`DEGENERATE_GINI`] when total income or total population is
    /// not positive.
    pub fn gini(
        &self,
        platform_profit: f64,
        rider_utility: f64,
        consumer_surplus: f64,
        demand: f64,
    ) -> f64 {
        let groups = self.groups(platform_profit, rider_utility, consumer_surplus, demand);
        gini_from_groups(&groups)
    }
}

/// Trapezoidal Lorenz-area Gini over arbitrary income groups.
///
/// Groups are ordered by ascending per-capita income before the cumulative
/// shares are accumulated. Groups with zero population are skipped.
pub fn gini_from_groups(groups: &[IncomeGroup]) -> f64 {
    let total_income: f64 = groups.iter().map(|g| g.income).sum();
    let total_population: f64 = groups.iter().map(|g| g.population).sum();
    if total_income <= 0.0 || total_population <= 0.0 {
        return DEGENERATE_GINI;
    }

    let mut sorted: Vec<IncomeGroup> = groups
        .iter()
        .copied()
        .filter(|g| g.population > 0.0)
        .collect();
    sorted.sort_by(|a, b| a.per_capita().total_cmp(&b.per_capita()));

    let mut prev_income_share = 0.0;
    let mut lorenz_area = 0.0;
    for group in &sorted {
        let pop_share = group.population / total_population;
        let income_share = prev_income_share + group.income / total_income;
        lorenz_area += (prev_income_share + income_share) / 2.0 * pop_share;
        prev_income_share = income_share;
    }

    (1.0 - 2.0 * lorenz_area).clamp(0.0, 1.0)
}
