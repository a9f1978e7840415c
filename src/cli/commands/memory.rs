//! Memory command implementation.

use super::{CommandContext, stdout, write_json};
use crate::cli::{MemoryArgs, MemoryFormat};
use crate::error::{BenchError, Result};
use crate::extract::memory::read_memory_profile;
use crate::format::{MemoryReport, csv};
use crate::model::{Benchmark, Version};
use std::io::Write;
use tracing::debug;

/// Execute the memory command.
///
/// # Errors
///
/// Returns an error if a name is unknown, the memory log is missing or
/// malformed, or `--zoom` names a parameter without a marker.
pub fn execute(args: &MemoryArgs, ctx: &CommandContext) -> Result<()> {
    let benchmark: Benchmark = args.benchmark.parse()?;
    let version: Version = args.version.parse()?;
    let mut profile = read_memory_profile(&ctx.paths.memory_log(benchmark, version))?;

    if let Some(parameter) = args.zoom {
        profile = profile
            .zoom_to(parameter)
            .ok_or(BenchError::ParameterMissing { parameter })?;
        debug!(parameter, samples = profile.samples.len(), "Zoomed memory profile");
    }

    let format = if ctx.json {
        MemoryFormat::Json
    } else {
        args.format
    };

    let mut out = stdout();
    match format {
        MemoryFormat::Csv => csv::write_memory_csv(&mut out, &profile)?,
        MemoryFormat::Json => {
            write_json(&mut out, &MemoryReport::new(benchmark, version, profile))?;
        }
    }
    out.flush()?;
    Ok(())
}
