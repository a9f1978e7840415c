//! Compare command implementation.
//!
//! Loads all six timing logs of a benchmark leniently and prints one LaTeX
//! table per benchmark parameter common to every log. A parameter whose
//! statistics fail is reported on stderr and skipped.

use super::{CommandContext, load_group, stdout, write_json};
use crate::cli::{CompareArgs, CompareFormat};
use crate::error::{BenchError, Result};
use crate::extract::Extractor;
use crate::format::{ComparisonReport, FailedParameter, LatexTable};
use crate::model::{Benchmark, Strategy};
use crate::stats::{self, ComparisonGrid};
use std::io::Write;
use tracing::info;

/// Execute the compare command.
///
/// # Errors
///
/// Returns an error if a log is missing or malformed, no parameter is
/// common to all six logs, or any parameter failed without `--keep-going`.
pub fn execute(args: &CompareArgs, ctx: &CommandContext) -> Result<()> {
    let benchmark: Benchmark = args.benchmark.parse()?;
    let extractor = Extractor::lenient().for_benchmark(benchmark);

    let gcd = load_group(ctx, extractor, benchmark, Strategy::Gcd)?;
    let sc = load_group(ctx, extractor, benchmark, Strategy::SwiftConcurrency)?;

    let outcomes = stats::cross_compare(
        [&gcd[0], &gcd[1], &gcd[2]],
        [&sc[0], &sc[1], &sc[2]],
        &ctx.config,
    );
    if outcomes.is_empty() {
        return Err(BenchError::NoCommonParameters {
            benchmark: benchmark.name().to_string(),
        });
    }

    let (grids, failed) = partition(outcomes);
    for failure in &failed {
        eprintln!(
            "Skipping {benchmark} N = {}: {}",
            failure.parameter, failure.error
        );
    }
    info!(tables = grids.len(), failed = failed.len(), "Comparison done");

    let failed_parameters: Vec<u64> = failed.iter().map(|f| f.parameter).collect();
    let format = if ctx.json {
        CompareFormat::Json
    } else {
        args.format
    };

    let mut out = stdout();
    match format {
        CompareFormat::Latex => {
            for grid in &grids {
                write!(out, "{}", LatexTable { benchmark, grid })?;
            }
        }
        CompareFormat::Json => {
            write_json(&mut out, &ComparisonReport::new(benchmark, &grids, failed))?;
        }
    }
    out.flush()?;

    if !failed_parameters.is_empty() && !args.keep_going {
        return Err(BenchError::ComparisonFailed {
            benchmark: benchmark.name().to_string(),
            failed: failed_parameters,
        });
    }
    Ok(())
}

/// Split per-parameter outcomes into grids and failures, both ascending.
#[must_use]
pub fn partition(
    outcomes: Vec<(u64, Result<ComparisonGrid>)>,
) -> (Vec<ComparisonGrid>, Vec<FailedParameter>) {
    let mut grids = Vec::new();
    let mut failed = Vec::new();
    for (parameter, outcome) in outcomes {
        match outcome {
            Ok(grid) => grids.push(grid),
            Err(err) => failed.push(FailedParameter {
                parameter,
                error: err.to_string(),
            }),
        }
    }
    (grids, failed)
}
