//! Plain text formatting for terminal output.
//!
//! Numbers are printed in the same scientific notation as the LaTeX tables
//! so text and table output can be compared by eye.

use super::latex::format_sci;
use super::output::RunReport;
use crate::config::catalog::version_style;
use crate::model::{SeriesPoint, Version};
use std::fmt::Write;

const PRECISION: usize = 4;

/// Format one series point as an aligned line.
#[must_use]
pub fn format_point_line(point: &SeriesPoint) -> String {
    format!(
        "  N={:<8} mean={}  CI=[{}, {}]",
        point.parameter,
        format_sci(point.mean, PRECISION),
        format_sci(point.ci_lower, PRECISION),
        format_sci(point.ci_upper, PRECISION)
    )
}

/// One block per version, headed by its label.
#[must_use]
pub fn format_series_text(series: &[(Version, Vec<SeriesPoint>)]) -> String {
    let mut out = String::new();
    for (version, points) in series {
        let _ = writeln!(out, "{} [{version}]", version_style(*version).label);
        if points.is_empty() {
            out.push_str("  (no runs)\n");
        }
        for point in points {
            out.push_str(&format_point_line(point));
            out.push('\n');
        }
    }
    out
}

/// Per-run lines of a single log.
#[must_use]
pub fn format_runs_text(runs: &[RunReport]) -> String {
    let mut out = String::new();
    for run in runs {
        let _ = write!(
            out,
            "N={:<8} iterations={:<5} samples={:<5} average={}",
            run.parameter,
            run.iteration_count,
            run.sample_count,
            format_sci(run.reported_average, PRECISION)
        );
        match (&run.summary, &run.error) {
            (Some(summary), _) => {
                let _ = write!(
                    out,
                    "  retained={} std_dev={}  CI=[{}, {}]",
                    summary.retained,
                    format_sci(summary.std_dev, PRECISION),
                    format_sci(summary.ci_lower, PRECISION),
                    format_sci(summary.ci_upper, PRECISION)
                );
            }
            (None, Some(error)) => {
                let _ = write!(out, "  ({error})");
            }
            (None, None) => {}
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{} run(s)", runs.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptProfile, RunRecord, Strategy};
    use crate::BenchError;

    #[test]
    fn test_format_point_line() {
        let point = SeriesPoint {
            parameter: 8,
            mean: 0.5,
            ci_lower: 0.25,
            ci_upper: 0.75,
        };
        assert_eq!(
            format_point_line(&point),
            "  N=8        mean=5.0000e-01  CI=[2.5000e-01, 7.5000e-01]"
        );
    }

    #[test]
    fn test_format_series_text_headings() {
        let series = vec![(Version::new(Strategy::Gcd, OptProfile::Speed), vec![])];
        assert_eq!(
            format_series_text(&series),
            "GCD (-O) [GCD_opt_speed]\n  (no runs)\n"
        );
    }

    #[test]
    fn test_format_runs_text_reports_failures() {
        let record = RunRecord {
            benchmark_parameter: 4,
            iteration_count: 3,
            samples: vec![1.0; 3],
            reported_average: 1.0,
        };
        let runs = vec![RunReport::new(
            &record,
            Err(BenchError::InsufficientSamples { retained: 0 }),
        )];
        let text = format_runs_text(&runs);
        assert!(text.starts_with("N=4        iterations=3     samples=3     average=1.0000e+00  ("));
        assert!(text.ends_with("1 run(s)\n"));
    }
}
