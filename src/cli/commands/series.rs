//! Series command implementation.
//!
//! Reduces each requested version's timing log to plot-ready points.
//! Extraction is strict: a malformed line anywhere aborts the series.

use super::{CommandContext, load_series, stdout, write_json};
use crate::cli::{SeriesArgs, SeriesFormat};
use crate::error::Result;
use crate::extract::Extractor;
use crate::format::{self, SeriesReport};
use crate::model::{Benchmark, SeriesPoint, Version};
use crate::stats;
use std::io::Write;
use tracing::info;

/// Execute the series command.
///
/// # Errors
///
/// Returns an error if a name is unknown, a log is missing or malformed, or
/// a run has too few samples.
pub fn execute(args: &SeriesArgs, ctx: &CommandContext) -> Result<()> {
    let benchmark: Benchmark = args.benchmark.parse()?;
    let versions = parse_versions(&args.versions)?;
    let extractor = Extractor::strict().for_benchmark(benchmark);

    let mut series = Vec::with_capacity(versions.len());
    for version in versions {
        let runs = load_series(ctx, extractor, benchmark, version)?;
        let points = stats::plot_series(&runs, &ctx.config)?;
        info!(%version, points = points.len(), "Series ready");
        series.push((version, points));
    }

    let format = if ctx.json {
        SeriesFormat::Json
    } else {
        args.format
    };
    render(benchmark, series, format)
}

/// Versions named on the command line, or all six.
///
/// # Errors
///
/// Returns `UnknownVersion` for the first unrecognized name.
pub fn parse_versions(values: &[String]) -> Result<Vec<Version>> {
    if values.is_empty() {
        return Ok(Version::ALL.to_vec());
    }
    values.iter().map(|value| value.parse()).collect()
}

fn render(
    benchmark: Benchmark,
    series: Vec<(Version, Vec<SeriesPoint>)>,
    format: SeriesFormat,
) -> Result<()> {
    let mut out = stdout();
    match format {
        SeriesFormat::Text => {
            writeln!(out, "{}", crate::config::catalog::benchmark_text(benchmark).title)?;
            write!(out, "{}", format::format_series_text(&series))?;
        }
        SeriesFormat::Csv => format::csv::write_series_csv(&mut out, &series)?,
        SeriesFormat::Json => write_json(&mut out, &SeriesReport::new(benchmark, series))?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OptProfile, Strategy};

    #[test]
    fn test_parse_versions_defaults_to_all() {
        assert_eq!(parse_versions(&[]).unwrap().len(), 6);
    }

    #[test]
    fn test_parse_versions_keeps_order() {
        let versions =
            parse_versions(&["SC_opt_size".to_string(), "_GCD_opt_none".to_string()]).unwrap();
        assert_eq!(
            versions,
            vec![
                Version::new(Strategy::SwiftConcurrency, OptProfile::Size),
                Version::new(Strategy::Gcd, OptProfile::None),
            ]
        );
        assert!(parse_versions(&["GCD_opt_fast".to_string()]).is_err());
    }
}
