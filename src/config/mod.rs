//! Configuration management for `benchstats`.
//!
//! Configuration sources and precedence (highest wins):
//! 1. CLI overrides (`--discard`, `--z`, `--trials`)
//! 2. Config file (`--config <path>`, else `<root>/benchstats.yaml`)
//! 3. Defaults
//!
//! The display catalog (labels, colors, chart text) lives in [`catalog`]
//! and is not configurable.

pub mod catalog;

use crate::error::{BenchError, Result};
use crate::model::{Benchmark, Version};
use crate::stats::{ASSUMED_TRIALS, DEFAULT_WARMUP_DISCARD, Z_95};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the data root when `--config` is not given.
pub const DEFAULT_CONFIG_FILENAME: &str = "benchstats.yaml";
/// Directory holding execution time logs.
const DEFAULT_EXECUTION_DIR: &str = "Official-execution-time";
/// Directory holding memory consumption logs.
const DEFAULT_MEMORY_DIR: &str = "Official-memory-consumption-profile";

/// Settings of the statistics pipeline and the log layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Samples dropped from the start of every run.
    pub warmup_discard: usize,
    /// Normal quantile used for every interval (1.96 = 95%, 3.291 = 99.9%).
    pub z_multiplier: f64,
    /// Trial count assumed by difference-of-means comparisons.
    pub assumed_trials: u32,
    pub execution_dir: String,
    pub memory_dir: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            warmup_discard: DEFAULT_WARMUP_DISCARD,
            z_multiplier: Z_95,
            assumed_trials: ASSUMED_TRIALS,
            execution_dir: DEFAULT_EXECUTION_DIR.to_string(),
            memory_dir: DEFAULT_MEMORY_DIR.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a YAML config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or fails validation.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            BenchError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&contents).map_err(|e| e.in_file(path))
    }

    /// Apply CLI overrides on top of this config.
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails validation.
    pub fn with_overrides(mut self, overrides: &CliOverrides) -> Result<Self> {
        if let Some(discard) = overrides.warmup_discard {
            self.warmup_discard = discard;
        }
        if let Some(z) = overrides.z_multiplier {
            self.z_multiplier = z;
        }
        if let Some(trials) = overrides.assumed_trials {
            self.assumed_trials = trials;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Config` if a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(self.z_multiplier.is_finite() && self.z_multiplier > 0.0) {
            return Err(BenchError::Config(format!(
                "z_multiplier must be a positive number, got {}",
                self.z_multiplier
            )));
        }
        if self.assumed_trials == 0 {
            return Err(BenchError::Config(
                "assumed_trials must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Overrides taken from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub warmup_discard: Option<usize>,
    pub z_multiplier: Option<f64>,
    pub assumed_trials: Option<u32>,
}

/// Resolve the effective configuration for a data root.
///
/// # Errors
///
/// Returns an error if an explicit config file is missing, or any
/// config file is invalid.
pub fn resolve(root: &Path, overrides: &CliOverrides) -> Result<AnalysisConfig> {
    let config = if let Some(path) = &overrides.config {
        debug!(path = %path.display(), "Loading explicit config");
        AnalysisConfig::load(path)?
    } else {
        let candidate = root.join(DEFAULT_CONFIG_FILENAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "Loading project config");
            AnalysisConfig::load(&candidate)?
        } else {
            AnalysisConfig::default()
        }
    };

    let config = config.with_overrides(overrides)?;
    debug!(?config, "Resolved analysis config");
    Ok(config)
}

/// Locations of the log files under one data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub root: PathBuf,
    pub execution_dir: PathBuf,
    pub memory_dir: PathBuf,
}

impl LogPaths {
    #[must_use]
    pub fn new(root: &Path, config: &AnalysisConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            execution_dir: root.join(&config.execution_dir),
            memory_dir: root.join(&config.memory_dir),
        }
    }

    /// `<execution_dir>/<Benchmark>/<Benchmark><suffix>`
    #[must_use]
    pub fn execution_log(&self, benchmark: Benchmark, version: Version) -> PathBuf {
        Self::log_in(&self.execution_dir, benchmark, version)
    }

    /// `<memory_dir>/<Benchmark>/<Benchmark><suffix>`
    #[must_use]
    pub fn memory_log(&self, benchmark: Benchmark, version: Version) -> PathBuf {
        Self::log_in(&self.memory_dir, benchmark, version)
    }

    fn log_in(dir: &Path, benchmark: Benchmark, version: Version) -> PathBuf {
        dir.join(benchmark.name())
            .join(format!("{}{}", benchmark.name(), version.suffix()))
    }
}
