//! `benchstats` - benchmark log extraction and statistics for GCD vs Swift
//! Concurrency runtime experiments.
//!
//! The pipeline reads line-oriented benchmark logs, groups the per-iteration
//! samples of each run, and reduces them to means, variances and
//! confidence intervals. Two strategy groups are compared per benchmark
//! parameter through a 3×3 grid of difference-of-means intervals.
//!
//! # Modules
//!
//! - [`extract`] - run and memory-profile extraction from log lines
//! - [`stats`] - variance, confidence intervals and cross-profile comparison
//! - [`config`] - runtime configuration and the static catalog
//! - [`format`] - LaTeX, CSV, JSON and text renderers
//! - [`cli`] - command-line surface of the `benchstats` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod model;
pub mod stats;

pub use error::{BenchError, ErrorCode, Result, StructuredError};
