//! Fixture log writers.
//!
//! Numbers are written with six decimals so every sample matches the
//! extractor's numeric pattern.

use super::cli::DataRoot;
use std::fmt::Write;
use std::path::PathBuf;

pub const EXECUTION_DIR: &str = "Official-execution-time";
pub const MEMORY_DIR: &str = "Official-memory-consumption-profile";

/// One run block of a timing log.
#[derive(Debug, Clone)]
pub struct RunFixture {
    pub header: String,
    pub samples: Vec<f64>,
    pub average: f64,
}

impl RunFixture {
    /// `Running <benchmark>(<parameter>) with <n> iterations`
    pub fn new(benchmark: &str, parameter: u64, samples: Vec<f64>, average: f64) -> Self {
        Self {
            header: format!(
                "Running {benchmark}({parameter}) with {} iterations",
                samples.len()
            ),
            samples,
            average,
        }
    }

    /// `n` identical samples; zero variance around `value`.
    pub fn steady(benchmark: &str, parameter: u64, value: f64, n: usize) -> Self {
        Self::new(benchmark, parameter, vec![value; n], value)
    }

    /// `n` samples alternating between `high` and `low`, reported at their mean.
    pub fn alternating(benchmark: &str, parameter: u64, high: f64, low: f64, n: usize) -> Self {
        let samples = (0..n).map(|i| if i % 2 == 0 { high } else { low }).collect();
        Self::new(benchmark, parameter, samples, f64::midpoint(high, low))
    }

    pub fn matrix(side: u64, samples: Vec<f64>, average: f64) -> Self {
        Self {
            header: format!(
                "Running MatrixMultiplication ({side}x{side}) with {} iterations",
                samples.len()
            ),
            samples,
            average,
        }
    }
}

/// Render a complete timing log.
pub fn timing_log(runs: &[RunFixture]) -> String {
    let mut out = String::from("Benchmark app started\n");
    for run in runs {
        let _ = writeln!(out, "{}", run.header);
        for sample in &run.samples {
            let _ = writeln!(out, "{sample:.6}");
        }
        let _ = writeln!(out, "Finished, average: {:.6} seconds", run.average);
        out.push('\n');
    }
    out.push_str("Benchmark done\n");
    out
}

/// Write `<root>/Official-execution-time/<B>/<B><suffix>`.
pub fn write_timing_log(
    root: &DataRoot,
    benchmark: &str,
    suffix: &str,
    runs: &[RunFixture],
) -> PathBuf {
    root.write(
        format!("{EXECUTION_DIR}/{benchmark}/{benchmark}{suffix}"),
        &timing_log(runs),
    )
}

/// Write `<root>/Official-memory-consumption-profile/<B>/<B><suffix>`.
pub fn write_memory_log(
    root: &DataRoot,
    benchmark: &str,
    suffix: &str,
    contents: &str,
) -> PathBuf {
    root.write(
        format!("{MEMORY_DIR}/{benchmark}/{benchmark}{suffix}"),
        contents,
    )
}

pub const GCD_SUFFIXES: [&str; 3] = ["_GCD_opt_none", "_GCD_opt_speed", "_GCD_opt_size"];
pub const SC_SUFFIXES: [&str; 3] = ["_SC_opt_none", "_SC_opt_speed", "_SC_opt_size"];
