//! Command implementations.
//!
//! Every command resolves the same [`CommandContext`] first: the data root,
//! the effective [`AnalysisConfig`] and the log layout under the root.

pub mod compare;
pub mod memory;
pub mod runs;
pub mod series;

use crate::config::{self, AnalysisConfig, CliOverrides, LogPaths};
use crate::error::Result;
use crate::extract::Extractor;
use crate::model::{Benchmark, Series, Strategy, Version};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved settings shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub root: PathBuf,
    pub config: AnalysisConfig,
    pub paths: LogPaths,
    /// `--json` was given; overrides any `--format`.
    pub json: bool,
}

impl CommandContext {
    /// Resolve configuration for `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is missing or invalid, or an
    /// override fails validation.
    pub fn new(root: &Path, overrides: &CliOverrides, json: bool) -> Result<Self> {
        let config = config::resolve(root, overrides)?;
        let paths = LogPaths::new(root, &config);
        Ok(Self {
            root: root.to_path_buf(),
            config,
            paths,
            json,
        })
    }
}

/// Read the timing logs of the three versions of one strategy.
///
/// # Errors
///
/// Returns the first missing-file or parse error.
pub fn load_group(
    ctx: &CommandContext,
    extractor: Extractor,
    benchmark: Benchmark,
    strategy: Strategy,
) -> Result<[Series; 3]> {
    let [none, speed, size] = Version::group(strategy);
    Ok([
        load_series(ctx, extractor, benchmark, none)?,
        load_series(ctx, extractor, benchmark, speed)?,
        load_series(ctx, extractor, benchmark, size)?,
    ])
}

/// Read the timing log of one version.
///
/// # Errors
///
/// Returns `LogNotFound` for a missing log, or its parse error.
pub fn load_series(
    ctx: &CommandContext,
    extractor: Extractor,
    benchmark: Benchmark,
    version: Version,
) -> Result<Series> {
    let path = ctx.paths.execution_log(benchmark, version);
    debug!(%benchmark, %version, path = %path.display(), "Loading series");
    extractor.read_series(&path)
}

/// Write a value as pretty JSON plus a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Locked, buffered stdout.
pub(crate) fn stdout() -> io::BufWriter<io::StdoutLock<'static>> {
    io::BufWriter::new(io::stdout().lock())
}
