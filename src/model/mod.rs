//! Core data types for `benchstats`.
//!
//! This module defines the fundamental types used throughout the application:
//! - `Benchmark` - The six benchmark programs
//! - `Strategy` / `OptProfile` / `Version` - Which build produced a log
//! - `RunRecord` - One `Running ... average` block of a log
//! - `Series` - All runs of one log, keyed by benchmark parameter
//! - `ComparisonCell` - Difference of two means with its error margin
//! - `MemoryProfile` - Memory samples with run markers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BenchError;

/// Benchmark programs run by the benchmark app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Benchmark {
    SpawnManyWaiting,
    SpawnManyWaitingGroup,
    SpawnManyActors,
    Fibonacci,
    NQueens,
    MatrixMultiplication,
}

impl Benchmark {
    pub const ALL: [Self; 6] = [
        Self::SpawnManyWaiting,
        Self::SpawnManyWaitingGroup,
        Self::SpawnManyActors,
        Self::Fibonacci,
        Self::NQueens,
        Self::MatrixMultiplication,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SpawnManyWaiting => "SpawnManyWaiting",
            Self::SpawnManyWaitingGroup => "SpawnManyWaitingGroup",
            Self::SpawnManyActors => "SpawnManyActors",
            Self::Fibonacci => "Fibonacci",
            Self::NQueens => "NQueens",
            Self::MatrixMultiplication => "MatrixMultiplication",
        }
    }

    /// Whether run headers carry a duplicated matrix side (`(25x25)`).
    #[must_use]
    pub fn is_two_dimensional(&self) -> bool {
        crate::extract::is_two_dimensional(self.name())
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BenchError::UnknownBenchmark {
                name: wanted.to_string(),
            })
    }
}

/// Concurrency implementation under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Grand Central Dispatch (Variant A).
    Gcd,
    /// Swift Concurrency (Variant B).
    SwiftConcurrency,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gcd => "GCD",
            Self::SwiftConcurrency => "SC",
        }
    }
}

/// Compiler optimization profile the benchmark app was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptProfile {
    /// `-Onone`
    None,
    /// `-O`
    Speed,
    /// `-Osize`
    Size,
}

impl OptProfile {
    /// Row/column order of comparison grids.
    pub const ORDER: [Self; 3] = [Self::None, Self::Speed, Self::Size];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Speed => "speed",
            Self::Size => "size",
        }
    }

    /// Compiler flag as shown in labels.
    #[must_use]
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::None => "-Onone",
            Self::Speed => "-O",
            Self::Size => "-Osize",
        }
    }
}

/// One build of the benchmark app: a strategy under a profile.
///
/// Serializes as its display name, e.g. `"GCD_opt_none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Version {
    pub strategy: Strategy,
    pub profile: OptProfile,
}

impl Version {
    /// All six versions, GCD profiles first.
    pub const ALL: [Self; 6] = [
        Self::new(Strategy::Gcd, OptProfile::None),
        Self::new(Strategy::Gcd, OptProfile::Speed),
        Self::new(Strategy::Gcd, OptProfile::Size),
        Self::new(Strategy::SwiftConcurrency, OptProfile::None),
        Self::new(Strategy::SwiftConcurrency, OptProfile::Speed),
        Self::new(Strategy::SwiftConcurrency, OptProfile::Size),
    ];

    #[must_use]
    pub const fn new(strategy: Strategy, profile: OptProfile) -> Self {
        Self { strategy, profile }
    }

    /// Versions of one strategy in grid order.
    #[must_use]
    pub const fn group(strategy: Strategy) -> [Self; 3] {
        [
            Self::new(strategy, OptProfile::None),
            Self::new(strategy, OptProfile::Speed),
            Self::new(strategy, OptProfile::Size),
        ]
    }

    /// Log file suffix, e.g. `_GCD_opt_none`.
    #[must_use]
    pub fn suffix(&self) -> String {
        format!("_{}_opt_{}", self.strategy.as_str(), self.profile.as_str())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_opt_{}", self.strategy.as_str(), self.profile.as_str())
    }
}

impl FromStr for Version {
    type Err = BenchError;

    /// Accepts `GCD_opt_none` with or without the leading underscore, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('_');
        Self::ALL
            .into_iter()
            .find(|v| v.to_string().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BenchError::UnknownVersion {
                version: s.trim().to_string(),
            })
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl TryFrom<String> for Version {
    type Error = BenchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One run block of a timing log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub benchmark_parameter: u64,
    pub iteration_count: u64,
    pub samples: Vec<f64>,
    pub reported_average: f64,
}

/// The runs of one log file keyed by benchmark parameter.
///
/// A duplicated parameter keeps the last record seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    runs: BTreeMap<u64, RunRecord>,
}

impl Series {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(&mut self, record: RunRecord) -> Option<RunRecord> {
        self.runs.insert(record.benchmark_parameter, record)
    }

    #[must_use]
    pub fn get(&self, parameter: u64) -> Option<&RunRecord> {
        self.runs.get(&parameter)
    }

    #[must_use]
    pub fn contains(&self, parameter: u64) -> bool {
        self.runs.contains_key(&parameter)
    }

    /// Parameters in ascending order.
    pub fn parameters(&self) -> impl Iterator<Item = u64> + '_ {
        self.runs.keys().copied()
    }

    /// Records in ascending parameter order.
    pub fn iter(&self) -> impl Iterator<Item = &RunRecord> {
        self.runs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl FromIterator<RunRecord> for Series {
    fn from_iter<T: IntoIterator<Item = RunRecord>>(iter: T) -> Self {
        let mut series = Self::new();
        for record in iter {
            series.insert(record);
        }
        series
    }
}

/// Difference between two means with its confidence half-width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCell {
    pub difference: f64,
    pub error_margin: f64,
}

impl ComparisonCell {
    /// Zero lies within `difference ± error_margin`.
    #[must_use]
    pub fn is_inconclusive(&self) -> bool {
        crate::stats::cell_is_inconclusive(self.difference, self.error_margin)
    }
}

/// Summary statistics of one run after the warm-up discard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub parameter: u64,
    /// The log-reported average.
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub retained: usize,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl RunSummary {
    #[must_use]
    pub const fn point(&self) -> SeriesPoint {
        SeriesPoint {
            parameter: self.parameter,
            mean: self.mean,
            ci_lower: self.ci_lower,
            ci_upper: self.ci_upper,
        }
    }
}

/// A plot-ready point: mean with its confidence band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub parameter: u64,
    pub mean: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

/// Position in the memory sample stream where a run started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryMarker {
    pub position: usize,
    pub parameter: u64,
}

/// Memory samples (MB) of one log with the run markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryProfile {
    pub samples: Vec<f64>,
    pub markers: Vec<MemoryMarker>,
}

impl MemoryProfile {
    /// Peak memory in MB, if any sample exists.
    #[must_use]
    pub fn peak(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    /// The zoomed-in view ending where the run of `parameter` starts.
    ///
    /// Keeps the samples before that marker and the markers up to it.
    /// `None` when no marker carries `parameter`.
    #[must_use]
    pub fn zoom_to(&self, parameter: u64) -> Option<Self> {
        let end = self
            .markers
            .iter()
            .find(|marker| marker.parameter == parameter)?
            .position
            .min(self.samples.len());
        Some(Self {
            samples: self.samples[..end].to_vec(),
            markers: self
                .markers
                .iter()
                .filter(|marker| marker.position <= end)
                .copied()
                .collect(),
        })
    }
}
