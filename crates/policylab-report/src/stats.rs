//! Descriptive statistics and trend ratios over a metric series.

use serde::{Deserialize, Serialize};

/// Summary statistics of a non-empty series.
///
/// Variance is the population variance (divided by `n`, not `n - 1`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Square root of the variance.
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
}

impl SeriesStats {
    /// Summarize a series; `None` when it is empty.
    pub fn from_series(series: &[f64]) -> Option<Self> {
        let mean = average(series)?;
        let squared_deviations: Vec<f64> = series.iter().map(|x| (x - mean).powi(2)).collect();
        let variance = average(&squared_deviations)?;
        let min = series.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count: series.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }

    /// Standard deviation relative to the mean, in percent.
    ///
    /// `None` when the mean is zero.
    pub const fn coefficient_of_variation(&self) -> Option<f64> {
        if self.mean == 0.0 {
            None
        } else {
            Some(self.std_dev / self.mean * 100.0)
        }
    }
}

/// Mean of a series; `None` when it is empty.
pub fn average(series: &[f64]) -> Option<f64> {
    let n = u32::try_from(series.len()).ok().filter(|n| *n > 0)?;
    Some(series.iter().sum::<f64>() / f64::from(n))
}

/// Percentage change of the last `window` samples against the `window`
/// samples before them.
///
/// Returns exactly 0 when the series holds fewer than `2 * window`
/// samples, when `window` is 0, or when the earlier window averages to 0.
pub fn trend(series: &[f64], window: usize) -> f64 {
    let Some(needed) = window.checked_mul(2) else {
        return 0.0;
    };
    if window == 0 || series.len() < needed {
        return 0.0;
    }

    let split = series.len().saturating_sub(window);
    let recent = series.get(split..).and_then(average);
    let prior = series
        .get(split.saturating_sub(window)..split)
        .and_then(average);

    match (recent, prior) {
        (Some(recent), Some(prior)) if prior != 0.0 => (recent - prior) / prior * 100.0,
        _ => 0.0,
    }
}
