//! Subcommand implementations.
//!
//! Each command returns the text to print so that `main` owns stdout.

use std::path::Path;

use policylab_core::{EquilibriumEngine, HistoryConfig, ScenarioPreset};
use policylab_report::{HistoryAnalysis, PolicyAssessment, SnapshotHistory};
use policylab_types::{EquilibriumSnapshot, ParameterVector, StressLevel};
use serde::Serialize;
use tracing::info;

use crate::error::CliError;

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Plain-text report.
    Text,
    /// The structured assessment as JSON.
    Json,
}

/// A preset together with its evaluation.
#[derive(Debug, Serialize)]
struct ScenarioReport {
    preset: ScenarioPreset,
    name: &'static str,
    params: ParameterVector,
    snapshot: EquilibriumSnapshot,
}

/// One line of the preset comparison.
#[derive(Debug, Serialize)]
struct PresetSummary {
    preset: ScenarioPreset,
    social_welfare: f64,
    platform_profit: f64,
    rider_utility: f64,
    stress_level: StressLevel,
    recommendations: usize,
}

/// Output of the `presets` command.
#[derive(Debug, Serialize)]
struct PresetComparison {
    scenarios: Vec<PresetSummary>,
    analysis: Option<HistoryAnalysis>,
}

/// Evaluate one parameter vector and render the snapshot as JSON.
///
/// With `strict`, out-of-range parameters are rejected instead of being
/// passed through the clamped pipeline.
pub fn compute(
    engine: &EquilibriumEngine,
    params: &ParameterVector,
    strict: bool,
) -> Result<String, CliError> {
    let snapshot = if strict {
        engine.compute_checked(params)?
    } else {
        engine.compute(params)
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Evaluate a named preset and render it with its parameters.
pub fn scenario(engine: &EquilibriumEngine, preset: ScenarioPreset) -> Result<String, CliError> {
    let params = preset.params();
    let report = ScenarioReport {
        preset,
        name: preset.display_name(),
        params,
        snapshot: engine.compute(&params),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Evaluate every preset into a history and render the comparison.
pub fn presets(engine: &EquilibriumEngine, history: &HistoryConfig) -> Result<String, CliError> {
    let mut recorded = SnapshotHistory::with_capacity(history.capacity);
    let mut scenarios = Vec::with_capacity(ScenarioPreset::ALL.len());
    for preset in ScenarioPreset::ALL {
        let params = preset.params();
        let snapshot = engine.compute(&params);
        scenarios.push(PresetSummary {
            preset,
            social_welfare: snapshot.social_welfare,
            platform_profit: snapshot.platform_profit,
            rider_utility: snapshot.rider_utility,
            stress_level: snapshot.labels.stress_level,
            recommendations: snapshot.recommendations.len(),
        });
        recorded.record(params, snapshot);
    }

    let comparison = PresetComparison {
        scenarios,
        analysis: recorded.analyze(history.trend_window),
    };
    Ok(serde_json::to_string_pretty(&comparison)?)
}

/// Assess a parameter vector against a history of the presets.
///
/// The history holds every preset followed by `params`, so the trends
/// compare the vector under study with the preset calibration points.
pub fn report(
    engine: &EquilibriumEngine,
    history: &HistoryConfig,
    params: &ParameterVector,
    format: ReportFormat,
) -> Result<String, CliError> {
    let mut recorded = preset_history(engine, history.capacity);
    recorded.record(*params, engine.compute(params));
    let analysis = recorded
        .analyze(history.trend_window)
        .ok_or(CliError::EmptyHistory)?;
    let assessment = PolicyAssessment::new(&analysis, params);
    info!(
        samples = analysis.samples,
        data_quality = assessment.data_quality,
        "policy assessment built"
    );

    match format {
        ReportFormat::Text => Ok(assessment.to_string()),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&assessment)?),
    }
}

/// Evaluate every preset and write the history as CSV.
///
/// Returns the number of data rows written.
pub fn export(
    engine: &EquilibriumEngine,
    history: &HistoryConfig,
    output: &Path,
) -> Result<usize, CliError> {
    let recorded = preset_history(engine, history.capacity);
    Ok(policylab_report::export_csv(&recorded, output)?)
}

fn preset_history(engine: &EquilibriumEngine, capacity: usize) -> SnapshotHistory {
    let mut history = SnapshotHistory::with_capacity(capacity);
    for preset in ScenarioPreset::ALL {
        let params = preset.params();
        history.record(params, engine.compute(&params));
    }
    info!(entries = history.len(), "presets evaluated");
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap_or_default()
    }

    #[test]
    fn compute_renders_snapshot_keys() {
        let out = compute(&EquilibriumEngine::default(), &ParameterVector::default(), false);
        let value = parse(&out.unwrap_or_default());
        assert!(value.get("SW").is_some());
        assert_eq!(value["labels"]["stressLevel"], "STABLE");
    }

    #[test]
    fn strict_compute_rejects_out_of_range_commission() {
        let params = ParameterVector {
            r: 1.5,
            ..ParameterVector::default()
        };
        let engine = EquilibriumEngine::default();
        assert!(compute(&engine, &params, false).is_ok());
        assert!(matches!(
            compute(&engine, &params, true),
            Err(CliError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn scenario_includes_parameters() {
        let out = scenario(&EquilibriumEngine::default(), ScenarioPreset::StrictRegulation);
        let value = parse(&out.unwrap_or_default());
        assert_eq!(value["preset"], "strict-regulation");
        assert_eq!(value["params"]["regulation"], 0.8);
        assert_eq!(value["snapshot"]["labels"]["regulationStatus"], "STRICT");
    }

    #[test]
    fn presets_compare_all_four() {
        let out = presets(&EquilibriumEngine::default(), &HistoryConfig::default());
        let value = parse(&out.unwrap_or_default());
        assert_eq!(value["scenarios"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["analysis"]["samples"], 4);
        assert_eq!(value["analysis"]["data_quality"], 60);
    }

    #[test]
    fn report_flags_concentrated_high_commission_market() {
        let params = ParameterVector {
            r: 0.3,
            e: 4.5,
            ..ParameterVector::default()
        }
        .with_competition(0.1)
        .with_monitoring(0.9);
        let out = report(
            &EquilibriumEngine::default(),
            &HistoryConfig::default(),
            &params,
            ReportFormat::Json,
        );
        let value = parse(&out.unwrap_or_default());
        assert_eq!(value["platform_strategy"], "high");
        assert_eq!(value["market_structure"], "MONOPOLISTIC");
        assert_eq!(value["short_term"][0], "ease_monitoring");
        assert_eq!(value["risks"]["systemic"][0], "workplace_safety");
        assert_eq!(value["risks"]["systemic"][1], "monopoly");
        assert_eq!(value["risks"]["regulatory"], "balanced");
        assert_eq!(value["data_quality"], 80);
    }

    #[test]
    fn text_report_lists_long_term_actions() {
        let out = report(
            &EquilibriumEngine::default(),
            &HistoryConfig::default(),
            &ParameterVector::default(),
            ReportFormat::Text,
        )
        .unwrap_or_default();
        assert!(out.starts_with("Executive summary
"));
        assert!(out.contains("Long-term actions
- Build a digital-economy governance"));
        assert!(out.ends_with("Data quality: 80%
"));
    }

    #[test]
    fn small_history_keeps_latest_presets() {
        let history = preset_history(&EquilibriumEngine::default(), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.latest().map(|entry| entry.params),
            Some(ScenarioPreset::InnovationBreakthrough.params())
        );
    }

    #[test]
    fn export_writes_one_row_per_preset() {
        let path = std::env::temp_dir().join(format!(
            "policylab-cli-{}.csv",
            policylab_types::HistoryEntryId::new()
        ));
        let rows = export(&EquilibriumEngine::default(), &HistoryConfig::default(), &path);
        assert_eq!(rows.ok(), Some(4));
        let written = std::fs::read_to_string(&path).unwrap_or_default();
        assert_eq!(written.lines().count(), 5);
        assert!(written.starts_with("timestamp,r,e,eta,tau,lambda"));
        let _ = std::fs::remove_file(&path);
    }
}
