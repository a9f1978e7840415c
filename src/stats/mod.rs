//! Statistics over extracted runs.
//!
//! Every run loses its first `warmup_discard` samples before any statistic is
//! computed. Variances are centered on the log-reported average of the run,
//! not on the recomputed mean of the retained samples.
//!
//! Intervals use a normal approximation with a fixed quantile: [`Z_95`] by
//! default, [`Z_999`] for a 99.9% interval.

mod compare;

pub use compare::{ComparisonGrid, common_parameters, compare_at, cross_compare};

use crate::config::AnalysisConfig;
use crate::error::{BenchError, Result};
use crate::model::{ComparisonCell, RunRecord, RunSummary, Series, SeriesPoint};
use tracing::debug;

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.96;
/// Two-sided 99.9% normal quantile.
pub const Z_999: f64 = 3.291;
/// Samples dropped from the start of every run by default.
pub const DEFAULT_WARMUP_DISCARD: usize = 10;
/// Trial count assumed for both sides of a difference-of-means comparison.
pub const ASSUMED_TRIALS: u32 = 100;

/// The samples left after dropping the first `discard`.
#[must_use]
pub fn retained_samples(samples: &[f64], discard: usize) -> &[f64] {
    samples.get(discard..).unwrap_or_default()
}

/// Σ(xᵢ − reference_mean)² / (n − 1).
///
/// # Errors
///
/// Returns `InsufficientSamples` when fewer than two samples are given.
pub fn sample_variance(samples: &[f64], reference_mean: f64) -> Result<f64> {
    if samples.len() < 2 {
        return Err(BenchError::InsufficientSamples {
            retained: samples.len(),
        });
    }
    let sum_sq: f64 = samples.iter().map(|x| (x - reference_mean).powi(2)).sum();
    Ok(sum_sq / (samples.len() - 1) as f64)
}

/// Square root of [`sample_variance`].
///
/// # Errors
///
/// Returns `InsufficientSamples` when fewer than two samples are given.
pub fn sample_std_dev(samples: &[f64], reference_mean: f64) -> Result<f64> {
    sample_variance(samples, reference_mean).map(f64::sqrt)
}

/// 95% interval `mean ± 1.96·std_dev/√n` as `(lower, upper)`.
#[must_use]
pub fn confidence_interval(mean: f64, std_dev: f64, n: usize) -> (f64, f64) {
    confidence_interval_with(mean, std_dev, n, Z_95)
}

/// Interval `mean ± z·std_dev/√n` as `(lower, upper)`.
#[must_use]
pub fn confidence_interval_with(mean: f64, std_dev: f64, n: usize, z: f64) -> (f64, f64) {
    let half_width = z * std_dev / (n as f64).sqrt();
    (mean - half_width, mean + half_width)
}

/// Compare two means assuming [`ASSUMED_TRIALS`] trials per side at 95%.
#[must_use]
pub fn compare_means(mean_a: f64, var_a: f64, mean_b: f64, var_b: f64) -> ComparisonCell {
    compare_means_with(mean_a, var_a, mean_b, var_b, ASSUMED_TRIALS, ASSUMED_TRIALS, Z_95)
}

/// Difference `mean_a − mean_b` with margin `z·√(var_a/n_a + var_b/n_b)`.
#[must_use]
pub fn compare_means_with(
    mean_a: f64,
    var_a: f64,
    mean_b: f64,
    var_b: f64,
    n_a: u32,
    n_b: u32,
    z: f64,
) -> ComparisonCell {
    let standard_error = (var_a / f64::from(n_a) + var_b / f64::from(n_b)).sqrt();
    ComparisonCell {
        difference: mean_a - mean_b,
        error_margin: z * standard_error,
    }
}

/// Zero lies within `difference ± error_margin`.
#[must_use]
pub fn cell_is_inconclusive(difference: f64, error_margin: f64) -> bool {
    error_margin.abs() >= difference.abs()
}

/// Reduce one run to its summary statistics.
///
/// # Errors
///
/// Returns `InsufficientSamples` when fewer than two samples survive the
/// warm-up discard.
pub fn summarize_run(record: &RunRecord, config: &AnalysisConfig) -> Result<RunSummary> {
    let retained = retained_samples(&record.samples, config.warmup_discard);
    let mean = record.reported_average;
    let variance = sample_variance(retained, mean)?;
    let std_dev = variance.sqrt();
    let (ci_lower, ci_upper) =
        confidence_interval_with(mean, std_dev, retained.len(), config.z_multiplier);

    Ok(RunSummary {
        parameter: record.benchmark_parameter,
        mean,
        variance,
        std_dev,
        retained: retained.len(),
        ci_lower,
        ci_upper,
    })
}

/// Summaries of every run of a series in parameter order.
///
/// # Errors
///
/// Fails on the first run that cannot be summarized; no partial result.
pub fn summarize_series(series: &Series, config: &AnalysisConfig) -> Result<Vec<RunSummary>> {
    series
        .iter()
        .map(|record| summarize_run(record, config))
        .collect()
}

/// Plot-ready `(parameter, mean, ci_lower, ci_upper)` points of a series.
///
/// # Errors
///
/// See [`summarize_series`].
pub fn plot_series(series: &Series, config: &AnalysisConfig) -> Result<Vec<SeriesPoint>> {
    let points: Vec<SeriesPoint> = summarize_series(series, config)?
        .iter()
        .map(RunSummary::point)
        .collect();
    debug!(points = points.len(), "Computed series points");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn record(parameter: u64, samples: Vec<f64>, average: f64) -> RunRecord {
        RunRecord {
            benchmark_parameter: parameter,
            iteration_count: samples.len() as u64,
            samples,
            reported_average: average,
        }
    }

    #[test]
    fn test_variance_uses_reference_mean() {
        // Sample mean is 2.0, but the reference mean is 1.0.
        let samples = [1.0, 2.0, 3.0];
        let variance = sample_variance(&samples, 1.0).unwrap();
        // (0 + 1 + 4) / 2
        assert!((variance - 2.5).abs() < TOLERANCE);
        let centered = sample_variance(&samples, 2.0).unwrap();
        assert!((centered - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_variance_needs_two_samples() {
        assert!(matches!(
            sample_variance(&[1.0], 1.0),
            Err(BenchError::InsufficientSamples { retained: 1 })
        ));
        assert!(matches!(
            sample_variance(&[], 1.0),
            Err(BenchError::InsufficientSamples { retained: 0 })
        ));
    }

    #[test]
    fn test_std_dev_is_sqrt_of_variance() {
        let samples = [0.2, 0.4, 0.9, 0.1];
        let variance = sample_variance(&samples, 0.35).unwrap();
        let std_dev = sample_std_dev(&samples, 0.35).unwrap();
        assert!((std_dev - variance.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_interval() {
        let (lower, upper) = confidence_interval(10.0, 2.0, 16);
        // 1.96 * 2 / 4
        assert!((upper - 10.98).abs() < TOLERANCE);
        assert!((lower - 9.02).abs() < TOLERANCE);

        let (lower, upper) = confidence_interval_with(10.0, 2.0, 16, Z_999);
        assert!((upper - lower - 2.0 * 3.291 * 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_compare_means_fixed_trials() {
        let cell = compare_means(1.0, 0.04, 0.5, 0.05);
        assert!((cell.difference - 0.5).abs() < TOLERANCE);
        // 1.96 * sqrt(0.04/100 + 0.05/100) = 1.96 * 0.03
        assert!((cell.error_margin - 0.0588).abs() < TOLERANCE);
    }

    #[test]
    fn test_compare_identical_is_zero() {
        let cell = compare_means(0.3, 0.01, 0.3, 0.01);
        assert!(cell.difference.abs() < f64::EPSILON);
        assert!(cell.is_inconclusive());
    }

    #[test]
    fn test_cell_is_inconclusive() {
        assert!(cell_is_inconclusive(0.01, 0.02));
        assert!(!cell_is_inconclusive(5.0, 0.1));
        assert!(cell_is_inconclusive(-0.01, 0.01));
    }

    #[test]
    fn test_summarize_run_discards_warmup() {
        // Ten wild warm-up samples followed by a steady state.
        let mut samples = vec![100.0; 10];
        samples.extend([1.0, 1.0, 1.0, 1.0]);
        let summary = summarize_run(&record(8, samples, 1.0), &AnalysisConfig::default()).unwrap();
        assert_eq!(summary.retained, 4);
        assert!(summary.variance.abs() < TOLERANCE);
        assert!((summary.ci_lower - 1.0).abs() < TOLERANCE);
        assert!((summary.ci_upper - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_summarize_run_insufficient_after_discard() {
        let summary = summarize_run(&record(8, vec![1.0; 11], 1.0), &AnalysisConfig::default());
        assert!(matches!(
            summary,
            Err(BenchError::InsufficientSamples { retained: 1 })
        ));
        let retained = retained_samples(&[1.0, 2.0], 10);
        assert!(retained.is_empty());
    }

    #[test]
    fn test_end_to_end_constant_samples() {
        let summary = summarize_run(
            &record(4, vec![0.01; 110], 0.01),
            &AnalysisConfig::default(),
        )
        .unwrap();
        assert_eq!(summary.retained, 100);
        assert!(summary.variance.abs() < TOLERANCE);
        assert!((summary.ci_lower - 0.01).abs() < TOLERANCE);
        assert!((summary.ci_upper - 0.01).abs() < TOLERANCE);
    }

    #[test]
    fn test_plot_series_aborts_on_failure() {
        let series: Series = vec![
            record(2, vec![0.5; 20], 0.5),
            record(4, vec![0.5; 5], 0.5),
        ]
        .into_iter()
        .collect();
        assert!(plot_series(&series, &AnalysisConfig::default()).is_err());

        let config = AnalysisConfig {
            warmup_discard: 0,
            ..AnalysisConfig::default()
        };
        let points = plot_series(&series, &config).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].parameter, 2);
    }
}
