//! Runs command implementation.
//!
//! Inspects a single timing log: every extracted run with its summary.
//! A run with too few samples is listed with the reason instead of a
//! summary, so one short run does not hide the rest of the file.

use super::{CommandContext, stdout, write_json};
use crate::cli::{RunsArgs, RunsFormat};
use crate::error::Result;
use crate::extract::{ExtractMode, Extractor};
use crate::format::{self, RunReport};
use crate::model::Benchmark;
use crate::stats;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct RunsOutput<'a> {
    path: &'a Path,
    lenient: bool,
    runs: Vec<RunReport>,
}

/// Execute the runs command.
///
/// # Errors
///
/// Returns an error if the benchmark name is unknown or the log is missing
/// or malformed.
pub fn execute(args: &RunsArgs, ctx: &CommandContext) -> Result<()> {
    let mode = if args.lenient {
        ExtractMode::Lenient
    } else {
        ExtractMode::Strict
    };
    let extractor = match &args.benchmark {
        Some(name) => Extractor::new(mode).for_benchmark(name.parse::<Benchmark>()?),
        None => Extractor::new(mode),
    };

    let runs: Vec<RunReport> = extractor
        .read_records(&args.path)?
        .iter()
        .map(|record| RunReport::new(record, stats::summarize_run(record, &ctx.config)))
        .collect();

    let format = if ctx.json {
        RunsFormat::Json
    } else {
        args.format
    };

    let mut out = stdout();
    match format {
        RunsFormat::Text => write!(out, "{}", format::format_runs_text(&runs))?,
        RunsFormat::Json => write_json(
            &mut out,
            &RunsOutput {
                path: &args.path,
                lenient: args.lenient,
                runs,
            },
        )?,
    }
    out.flush()?;
    Ok(())
}
