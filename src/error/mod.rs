//! Error types and handling for `benchstats`.
//!
//! # Design
//!
//! - Uses `thiserror` for derive-based error types
//! - Parse errors carry the 1-based line number they were raised on
//! - File-level entry points wrap errors with the offending path (`InFile`)
//! - Provides structured JSON output for scripted callers

mod structured;

pub use structured::{ErrorCode, StructuredError};

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for `benchstats` operations.
#[derive(Error, Debug)]
pub enum BenchError {
    // === Log Parse Errors ===
    /// A `Running` header carried the wrong number of integers.
    #[error("Malformed run header at line {line}: {reason}")]
    MalformedRunHeader { line: usize, reason: String },

    /// A sample line had no numeric token (strict mode only).
    #[error("Malformed sample line at line {line}: '{content}'")]
    MalformedSampleLine { line: usize, content: String },

    /// An `average` line lacked a `<number> seconds` match.
    #[error("Missing average at line {line}: '{content}'")]
    MissingAverage { line: usize, content: String },

    /// An `average` line appeared with no open run.
    #[error("Average line {line} does not belong to any run")]
    OrphanAverage { line: usize },

    /// A `mem:` line whose value is not a number.
    #[error("Malformed memory line at line {line}: '{content}'")]
    MalformedMemoryLine { line: usize, content: String },

    // === Statistics Errors ===
    /// Fewer than two samples survived the warm-up discard.
    #[error("Insufficient samples: {retained} retained, at least 2 required")]
    InsufficientSamples { retained: usize },

    /// A series has no run for the requested parameter.
    #[error("No run for benchmark parameter {parameter}")]
    ParameterMissing { parameter: u64 },

    /// No benchmark parameter is shared by every compared series.
    #[error("No benchmark parameter is common to all series of {benchmark}")]
    NoCommonParameters { benchmark: String },

    /// One or more parameters could not be compared.
    #[error("Comparison failed for {benchmark} at N = {failed:?}")]
    ComparisonFailed { benchmark: String, failed: Vec<u64> },

    // === Lookup Errors ===
    /// Benchmark name is not in the catalog.
    #[error("Unknown benchmark: {name}")]
    UnknownBenchmark { name: String },

    /// Version identifier is not in the catalog.
    #[error("Unknown version: {version}")]
    UnknownVersion { version: String },

    /// The expected log file does not exist.
    #[error("Log file not found at '{path}'")]
    LogNotFound { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // === Wrapped errors ===
    /// Error raised while processing a specific log file.
    #[error("{path}: {source}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<BenchError>,
    },

    /// Wrapped anyhow error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BenchError {
    /// Attach the log file path to an error.
    #[must_use]
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            already @ Self::InFile { .. } => already,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// The underlying error, looking through `InFile` wrappers.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    /// Human-friendly suggestion for fixing this error.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self.root() {
            Self::MalformedSampleLine { .. } => {
                Some("Re-run with --lenient to skip lines without a numeric sample")
            }
            Self::InsufficientSamples { .. } => {
                Some("Lower the warm-up discard with --discard or check the run length")
            }
            Self::UnknownBenchmark { .. } => Some(
                "Valid benchmarks: SpawnManyWaiting, SpawnManyWaitingGroup, SpawnManyActors, Fibonacci, NQueens, MatrixMultiplication",
            ),
            Self::UnknownVersion { .. } => Some(
                "Valid versions: GCD_opt_none, GCD_opt_speed, GCD_opt_size, SC_opt_none, SC_opt_speed, SC_opt_size",
            ),
            Self::LogNotFound { .. } => Some("Check --root and the configured log directories"),
            Self::ComparisonFailed { .. } => {
                Some("Use --keep-going to emit the tables that could be computed")
            }
            _ => None,
        }
    }
}

/// Result type using `BenchError`.
pub type Result<T> = std::result::Result<T, BenchError>;
