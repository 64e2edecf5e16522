//! Policy assessment of a recorded history.
//!
//! A [`PolicyAssessment`] combines the aggregate view of a history with the
//! parameter vector currently under study. Every judgement is a threshold
//! rule over one of the two. Thresholds are strict: a value exactly on a
//! boundary does not trigger the rule.

use core::fmt;

use policylab_core::labels::{market_status, regulation_status};
use policylab_core::recommendation::{HIGH_COMMISSION, LOW_COMPETITION};
use policylab_types::{MarketStatus, ParameterVector, RegulationStatus};
use serde::{Deserialize, Serialize};

use crate::analysis::{HistoryAnalysis, TrendDirection};

/// Mean welfare above which the equilibrium counts as healthy.
pub const HEALTHY_WELFARE: f64 = 15_000.0;

/// Regulation above which riders count as protected by regulation.
pub const PROTECTIVE_REGULATION: f64 = 0.5;

/// Regulation below which rider protection counts as weak.
pub const WEAK_REGULATION: f64 = 0.3;

/// Competition above which the market counts as intensely contested.
pub const INTENSE_COMPETITION: f64 = 0.6;

/// Competition below which the market counts as concentrated.
pub const CONCENTRATED_COMPETITION: f64 = 0.3;

/// Commission below which the platform is pricing for expansion.
pub const LOW_COMMISSION: f64 = 0.15;

/// Monitoring above which easing surveillance is advised.
pub const HEAVY_MONITORING: f64 = 0.7;

/// Mean Gini coefficient above which redistribution is advised.
pub const HIGH_INEQUALITY: f64 = 0.4;

/// Innovation below which technology investment is advised.
pub const UNDER_INVESTED_INNOVATION: f64 = 0.5;

/// Mean sustainability index below which environmental risk is flagged.
pub const UNSUSTAINABLE_INDEX: f64 = 50.0;

/// Labor intensity above which workplace-safety risk is flagged.
pub const UNSAFE_INTENSITY: f64 = 4.0;

/// Competition below which monopoly risk is flagged.
pub const MONOPOLY_COMPETITION: f64 = 0.2;

/// Regulation above which over-regulation risk is flagged.
pub const OVER_REGULATION: f64 = 0.8;

/// Regulation below which under-regulation risk is flagged.
pub const UNDER_REGULATION: f64 = 0.2;

/// Profit trend, in percent, below which falling profitability is flagged.
pub const PROFIT_DECLINE: f64 = -10.0;

/// Innovation below which technology lag is flagged.
pub const TECHNOLOGY_LAG: f64 = 0.3;

/// Defines a serializable advisory enum whose variants carry a fixed
/// statement, exposed through `description` and `Display`.
macro_rules! advisory {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Statement printed in the text report.
            pub const fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.description())
            }
        }
    };
}

advisory! {
    /// One line of the executive summary.
    SummaryFinding {
        /// Mean welfare above [`HEALTHY_WELFARE`].
        HealthyEquilibrium => "The equilibrium is broadly healthy and social welfare is high",
        /// Mean welfare at or below [`HEALTHY_WELFARE`].
        RoomForImprovement => "The equilibrium leaves room for improvement in social welfare",
        /// Regulation above [`PROTECTIVE_REGULATION`].
        ProtectiveRegulation => "Strong regulation eases algorithmic pressure and protects workers",
        /// Regulation below [`WEAK_REGULATION`].
        WeakRegulation => "Regulation is comparatively weak; worker protection needs attention",
        /// Competition above [`INTENSE_COMPETITION`].
        IntenseCompetition => "Competition is intense, which favours consumers but squeezes platform profit",
        /// Competition below [`CONCENTRATED_COMPETITION`].
        ConcentratedMarket => "The market is concentrated; antitrust oversight should be strengthened",
    }
}

advisory! {
    /// Technology adoption tier.
    InnovationLevel {
        /// Innovation above 0.7.
        Active => "Innovation is active and digital transformation is paying off",
        /// Innovation above 0.4.
        Moderate => "Innovation is moderate with room to grow",
        /// Innovation at or below 0.4.
        Lagging => "Innovation is insufficient; research investment should increase",
    }
}

advisory! {
    /// Judgement of the platform's commission rate.
    CommissionStance {
        /// Commission above the high-commission threshold.
        High => "The commission is high and may hold back demand; consider lowering it",
        /// Commission between the two thresholds.
        Balanced => "The commission balances growth and profitability",
        /// Commission below [`LOW_COMMISSION`].
        Low => "The commission is low, which supports expansion but strains profitability",
    }
}

advisory! {
    /// Judgement of rider welfare across the history.
    WorkerWelfare {
        /// Mean rider utility above zero.
        Protected => "Aggregate rider utility is positive; basic worker rights are secured",
        /// Mean rider utility at or below zero.
        AtRisk => "Rider utility is low; labor protection should be strengthened",
    }
}

advisory! {
    /// Action advised for the short term.
    ShortTermAction {
        /// Monitoring above [`HEAVY_MONITORING`].
        EaseMonitoring => "Reduce algorithmic monitoring to relieve rider stress",
        /// Mean Gini above [`HIGH_INEQUALITY`].
        RedistributeIncome => "Introduce income redistribution to reduce inequality",
        /// Weak regulation while mean rider utility is negative.
        MinimumIncomeGuarantee => "Introduce a minimum income guarantee without delay",
        /// Nothing else applies.
        KeepMonitoring => "The state is stable; keep monitoring the key indicators",
    }
}

advisory! {
    /// Action advised for the medium term.
    MediumTermAction {
        /// Innovation below [`UNDER_INVESTED_INNOVATION`].
        InvestInTechnology => "Invest in research to raise routing efficiency and user experience",
        /// Competition below the low-competition threshold.
        AntitrustPolicy => "Adopt antitrust policy to promote fair competition",
        /// Always advised.
        IndustryStandards => "Establish industry standards and best-practice guidelines",
        /// Always advised.
        DataTransparency => "Strengthen data privacy protection and algorithmic transparency",
    }
}

advisory! {
    /// Structural action advised for the long term.
    LongTermAction {
        /// Governance that balances innovation and regulation.
        GovernanceFramework => "Build a digital-economy governance framework balancing innovation and regulation",
        /// Sustainable platform growth.
        SustainableGrowth => "Drive sustainable platform growth that benefits every party",
        /// Cross-border cooperation.
        InternationalCooperation => "Set up international cooperation for cross-border platform governance",
        /// New forms of employment relationship.
        NewLaborRelations => "Develop labor relations suited to the digital transition",
    }
}

advisory! {
    /// Risk to the system as a whole.
    SystemicRisk {
        /// Mean sustainability below [`UNSUSTAINABLE_INDEX`].
        Environmental => "Environmental sustainability risk is high",
        /// Labor intensity above [`UNSAFE_INTENSITY`].
        WorkplaceSafety => "Excessive labor intensity may cause safety incidents",
        /// Competition below [`MONOPOLY_COMPETITION`].
        Monopoly => "Monopoly risk may harm consumers",
    }
}

advisory! {
    /// Risk arising from the level of regulation.
    RegulatoryRisk {
        /// Regulation above [`OVER_REGULATION`].
        OverRegulation => "Excessive regulation may stifle innovation and market vitality",
        /// Regulation below [`UNDER_REGULATION`].
        UnderRegulation => "Insufficient regulation may lead to market failure and social problems",
        /// Regulation between the two thresholds.
        Balanced => "Regulation is moderate and the risk is under control",
    }
}

advisory! {
    /// Risk to the platform's market position.
    MarketRisk {
        /// Profit trend below [`PROFIT_DECLINE`].
        FallingProfitability => "Platform profitability is declining",
        /// Innovation below [`TECHNOLOGY_LAG`].
        TechnologyLag => "Lagging technology threatens competitiveness",
    }
}

impl InnovationLevel {
    /// Tier for a technology adoption level.
    pub const fn classify(innovation: f64) -> Self {
        if innovation > 0.7 {
            Self::Active
        } else if innovation > 0.4 {
            Self::Moderate
        } else {
            Self::Lagging
        }
    }
}

impl CommissionStance {
    /// Stance for a commission rate.
    pub const fn classify(commission: f64) -> Self {
        if commission > HIGH_COMMISSION {
            Self::High
        } else if commission < LOW_COMMISSION {
            Self::Low
        } else {
            Self::Balanced
        }
    }
}

impl WorkerWelfare {
    /// Judgement for a mean rider utility.
    pub const fn from_mean_utility(mean: f64) -> Self {
        if mean > 0.0 {
            Self::Protected
        } else {
            Self::AtRisk
        }
    }
}

impl LongTermAction {
    /// Every long-term action, in report order.
    pub const ALL: [Self; 4] = [
        Self::GovernanceFramework,
        Self::SustainableGrowth,
        Self::InternationalCooperation,
        Self::NewLaborRelations,
    ];
}

impl RegulatoryRisk {
    /// Risk for a regulation level.
    pub const fn classify(regulation: f64) -> Self {
        if regulation > OVER_REGULATION {
            Self::OverRegulation
        } else if regulation < UNDER_REGULATION {
            Self::UnderRegulation
        } else {
            Self::Balanced
        }
    }
}

/// Executive summary lines: welfare, then regulation, then competition.
pub fn executive_summary(analysis: &HistoryAnalysis, params: &ParameterVector) -> Vec<SummaryFinding> {
    let mut findings = Vec::with_capacity(3);
    findings.push(if analysis.welfare.mean > HEALTHY_WELFARE {
        SummaryFinding::HealthyEquilibrium
    } else {
        SummaryFinding::RoomForImprovement
    });
    if params.regulation > PROTECTIVE_REGULATION {
        findings.push(SummaryFinding::ProtectiveRegulation);
    } else if params.regulation < WEAK_REGULATION {
        findings.push(SummaryFinding::WeakRegulation);
    }
    if params.competition > INTENSE_COMPETITION {
        findings.push(SummaryFinding::IntenseCompetition);
    } else if params.competition < CONCENTRATED_COMPETITION {
        findings.push(SummaryFinding::ConcentratedMarket);
    }
    findings
}

/// Short-term actions; [`ShortTermAction::KeepMonitoring`] alone when no
/// rule fires.
pub fn short_term_actions(
    analysis: &HistoryAnalysis,
    params: &ParameterVector,
) -> Vec<ShortTermAction> {
    let mut actions = Vec::new();
    if params.monitoring > HEAVY_MONITORING {
        actions.push(ShortTermAction::EaseMonitoring);
    }
    if analysis.gini.mean > HIGH_INEQUALITY {
        actions.push(ShortTermAction::RedistributeIncome);
    }
    if params.regulation < WEAK_REGULATION && analysis.rider_utility.mean < 0.0 {
        actions.push(ShortTermAction::MinimumIncomeGuarantee);
    }
    if actions.is_empty() {
        actions.push(ShortTermAction::KeepMonitoring);
    }
    actions
}

/// Medium-term actions; the last two are always advised.
pub fn medium_term_actions(params: &ParameterVector) -> Vec<MediumTermAction> {
    let mut actions = Vec::with_capacity(4);
    if params.innovation < UNDER_INVESTED_INNOVATION {
        actions.push(MediumTermAction::InvestInTechnology);
    }
    if params.competition < LOW_COMPETITION {
        actions.push(MediumTermAction::AntitrustPolicy);
    }
    actions.push(MediumTermAction::IndustryStandards);
    actions.push(MediumTermAction::DataTransparency);
    actions
}

/// Systemic risks; empty when systemic risk is under control.
pub fn systemic_risks(analysis: &HistoryAnalysis, params: &ParameterVector) -> Vec<SystemicRisk> {
    let mut risks = Vec::new();
    if analysis.sustainability.mean < UNSUSTAINABLE_INDEX {
        risks.push(SystemicRisk::Environmental);
    }
    if params.e > UNSAFE_INTENSITY {
        risks.push(SystemicRisk::WorkplaceSafety);
    }
    if params.competition < MONOPOLY_COMPETITION {
        risks.push(SystemicRisk::Monopoly);
    }
    risks
}

/// Market risks; empty when market risk is under control.
pub fn market_risks(analysis: &HistoryAnalysis, params: &ParameterVector) -> Vec<MarketRisk> {
    let mut risks = Vec::new();
    if analysis.trends.profit < PROFIT_DECLINE {
        risks.push(MarketRisk::FallingProfitability);
    }
    if params.innovation < TECHNOLOGY_LAG {
        risks.push(MarketRisk::TechnologyLag);
    }
    risks
}

/// The three risk dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Risks to the system as a whole.
    pub systemic: Vec<SystemicRisk>,
    /// Risk from the level of regulation.
    pub regulatory: RegulatoryRisk,
    /// Risks to the platform's market position.
    pub market: Vec<MarketRisk>,
}

/// Headline figures of the history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticalSummary {
    /// Mean platform profit.
    pub profit_mean: f64,
    /// Standard deviation of platform profit.
    pub profit_std_dev: f64,
    /// Coefficient of variation of platform profit, percent. `None` when
    /// mean profit is zero.
    pub profit_variation: Option<f64>,
    /// Mean social welfare.
    pub welfare_mean: f64,
    /// Welfare trend ratio, percent.
    pub welfare_trend: f64,
    /// Mean market efficiency.
    pub efficiency_mean: f64,
    /// Standard deviation of market efficiency.
    pub efficiency_std_dev: f64,
}

impl StatisticalSummary {
    /// Pick the headline figures out of an analysis.
    pub const fn from_analysis(analysis: &HistoryAnalysis) -> Self {
        Self {
            profit_mean: analysis.profit.mean,
            profit_std_dev: analysis.profit.std_dev,
            profit_variation: analysis.profit.coefficient_of_variation(),
            welfare_mean: analysis.welfare.mean,
            welfare_trend: analysis.trends.welfare,
            efficiency_mean: analysis.efficiency.mean,
            efficiency_std_dev: analysis.efficiency.std_dev,
        }
    }
}

/// Structured policy report for one parameter vector against a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyAssessment {
    /// The parameter vector under study.
    pub params: ParameterVector,
    /// Executive summary lines.
    pub summary: Vec<SummaryFinding>,
    /// Market structure implied by the competition level.
    pub market_structure: MarketStatus,
    /// Technology adoption tier.
    pub innovation: InnovationLevel,
    /// Regulatory regime.
    pub regulation: RegulationStatus,
    /// Judgement of the commission rate.
    pub platform_strategy: CommissionStance,
    /// Judgement of rider welfare.
    pub worker_welfare: WorkerWelfare,
    /// Direction of the welfare trend.
    pub welfare_trend: TrendDirection,
    /// Short-term actions.
    pub short_term: Vec<ShortTermAction>,
    /// Medium-term actions.
    pub medium_term: Vec<MediumTermAction>,
    /// Long-term actions.
    pub long_term: Vec<LongTermAction>,
    /// Risk assessment.
    pub risks: RiskAssessment,
    /// Headline figures.
    pub statistics: StatisticalSummary,
    /// Data-quality score in percent.
    pub data_quality: u8,
}

impl PolicyAssessment {
    /// Assess `params` against the analysis of a history.
    pub fn new(analysis: &HistoryAnalysis, params: &ParameterVector) -> Self {
        Self {
            params: *params,
            summary: executive_summary(analysis, params),
            market_structure: market_status(params.competition),
            innovation: InnovationLevel::classify(params.innovation),
            regulation: regulation_status(params.regulation),
            platform_strategy: CommissionStance::classify(params.r),
            worker_welfare: WorkerWelfare::from_mean_utility(analysis.rider_utility.mean),
            welfare_trend: analysis.welfare_direction(),
            short_term: short_term_actions(analysis, params),
            medium_term: medium_term_actions(params),
            long_term: LongTermAction::ALL.to_vec(),
            risks: RiskAssessment {
                systemic: systemic_risks(analysis, params),
                regulatory: RegulatoryRisk::classify(params.regulation),
                market: market_risks(analysis, params),
            },
            statistics: StatisticalSummary::from_analysis(analysis),
            data_quality: analysis.data_quality,
        }
    }
}

const fn market_structure_text(status: MarketStatus) -> &'static str {
    match status {
        MarketStatus::Competitive => "fully competitive",
        MarketStatus::Oligopoly => "oligopolistic competition",
        MarketStatus::Monopolistic => "monopolistic competition",
    }
}

const fn regulation_text(status: RegulationStatus) -> &'static str {
    match status {
        RegulationStatus::Strict => "strict, focused on labor protection and social responsibility",
        RegulationStatus::Moderate => "moderate, balancing efficiency and fairness",
        RegulationStatus::LaissezFaire => "light, leaving the market in the lead",
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, heading: &str, items: &[T]) -> fmt::Result {
    writeln!(f, "{heading}")?;
    for item in items {
        writeln!(f, "- {item}")?;
    }
    Ok(())
}

impl fmt::Display for PolicyAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, "Executive summary", &self.summary)?;
        writeln!(f)?;
        writeln!(f, "Market structure: {}", market_structure_text(self.market_structure))?;
        writeln!(f, "Innovation: {}", self.innovation)?;
        writeln!(f, "Regulation: {}", regulation_text(self.regulation))?;
        writeln!(f, "Platform strategy: {}", self.platform_strategy)?;
        writeln!(f, "Worker welfare: {}", self.worker_welfare)?;
        writeln!(f, "Welfare trend: {}", self.welfare_trend)?;
        writeln!(f)?;
        write_list(f, "Short-term actions", &self.short_term)?;
        write_list(f, "Medium-term actions", &self.medium_term)?;
        write_list(f, "Long-term actions", &self.long_term)?;
        writeln!(f)?;
        if self.risks.systemic.is_empty() {
            writeln!(f, "Systemic risk: under control")?;
        } else {
            write_list(f, "Systemic risks", &self.risks.systemic)?;
        }
        writeln!(f, "Regulatory risk: {}", self.risks.regulatory)?;
        if self.risks.market.is_empty() {
            writeln!(f, "Market risk: under control")?;
        } else {
            write_list(f, "Market risks", &self.risks.market)?;
        }
        writeln!(f)?;

        let stats = &self.statistics;
        writeln!(
            f,
            "Profit: mean {:.2}, std dev {:.2}",
            stats.profit_mean, stats.profit_std_dev
        )?;
        match stats.profit_variation {
            Some(cv) => writeln!(f, "Profit coefficient of variation: {cv:.1}%")?,
            None => writeln!(f, "Profit coefficient of variation: n/a")?,
        }
        writeln!(
            f,
            "Welfare: mean {:.2}, trend {:.1}%",
            stats.welfare_mean, stats.welfare_trend
        )?;
        writeln!(
            f,
            "Market efficiency: mean {:.1}%, std dev {:.1}%",
            stats.efficiency_mean, stats.efficiency_std_dev
        )?;
        writeln!(f, "Data quality: {}%", self.data_quality)
    }
}
