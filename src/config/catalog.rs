//! Static display catalog: labels, colors, chart titles and axis text.
//!
//! These tables are fixed configuration, built once and never mutated.

use crate::model::{Benchmark, OptProfile, Strategy, Version};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Y-axis label of execution time charts.
pub const RUNTIME_AXIS_LABEL: &str = "Runtime (seconds)";
/// X-axis label of memory charts.
pub const MEMORY_TIME_AXIS_LABEL: &str = "Time (seconds)";
/// Y-axis label of memory charts.
pub const MEMORY_AXIS_LABEL: &str = "Memory (Mb)";
/// Fill color of the area under memory curves.
pub const MEMORY_FILL_COLOR: &str = "#74a2f8";
/// Line color of memory curves.
pub const MEMORY_LINE_COLOR: &str = "#2b60c0";
/// Memory samples are taken once per frame.
pub const MEMORY_SAMPLES_PER_SECOND: f64 = 60.0;

/// Label and color of one version's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionStyle {
    pub label: &'static str,
    pub color: &'static str,
}

/// Title and x-axis label of one benchmark's chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkText {
    pub title: &'static str,
    pub x_label: &'static str,
}

static VERSION_STYLES: LazyLock<HashMap<Version, VersionStyle>> = LazyLock::new(|| {
    use OptProfile as P;
    use Strategy as S;

    [
        (Version::new(S::Gcd, P::None), "GCD (-Onone)", "#9e70f2"),
        (Version::new(S::Gcd, P::Speed), "GCD (-O)", "#ec6c2c"),
        (Version::new(S::Gcd, P::Size), "GCD (-Osize)", "#7da140"),
        (Version::new(S::SwiftConcurrency, P::None), "SC (-Onone)", "#428fdf"),
        (Version::new(S::SwiftConcurrency, P::Speed), "SC (-O)", "#e6e600"),
        (Version::new(S::SwiftConcurrency, P::Size), "SC (-Osize)", "#dc5e8a"),
    ]
    .into_iter()
    .map(|(version, label, color)| (version, VersionStyle { label, color }))
    .collect()
});

static BENCHMARK_TEXT: LazyLock<HashMap<Benchmark, BenchmarkText>> = LazyLock::new(|| {
    [
        (
            Benchmark::SpawnManyWaiting,
            "SpawnManyWaiting (spawning N tasks, 100 iterations)",
            "Number of tasks",
        ),
        (
            Benchmark::SpawnManyWaitingGroup,
            "SpawnManyWaitingGroup (spawning N tasks, 100 iterations)",
            "Number of tasks",
        ),
        (
            Benchmark::SpawnManyActors,
            "SpawnManyActors (spawning N actors, 100 iterations)",
            "Number of actors",
        ),
        (
            Benchmark::Fibonacci,
            "Fibonacci (calculating Fib(n), 100 iterations)",
            "Fibonacci number, n",
        ),
        (
            Benchmark::NQueens,
            "NQueens (finding all solutions for N queens, 100 iterations)",
            "Number of queens",
        ),
        (
            Benchmark::MatrixMultiplication,
            "MatrixMultiplication (multiplying two NxN matrices, 100 iterations)",
            "Matrix size (NxN)",
        ),
    ]
    .into_iter()
    .map(|(benchmark, title, x_label)| (benchmark, BenchmarkText { title, x_label }))
    .collect()
});

/// Label and color of a version.
#[must_use]
pub fn version_style(version: Version) -> VersionStyle {
    VERSION_STYLES[&version]
}

/// Chart title and x-axis label of a benchmark.
#[must_use]
pub fn benchmark_text(benchmark: Benchmark) -> BenchmarkText {
    BENCHMARK_TEXT[&benchmark]
}

/// Label drawn next to a run marker in memory charts.
#[must_use]
pub fn marker_label(benchmark: Benchmark, parameter: u64) -> String {
    match benchmark {
        Benchmark::SpawnManyWaiting | Benchmark::SpawnManyWaitingGroup => {
            format!("{parameter} tasks")
        }
        Benchmark::SpawnManyActors => format!("{parameter} actors"),
        Benchmark::Fibonacci => format!("Fib({parameter})"),
        Benchmark::NQueens => format!("{parameter} queens"),
        Benchmark::MatrixMultiplication => format!("({parameter}x{parameter}) matrix"),
    }
}

/// Title of a benchmark's memory chart.
#[must_use]
pub fn memory_title(benchmark: Benchmark) -> String {
    format!("{benchmark} memory consumption profile")
}

/// Seconds at a memory sample position, rounded to two decimals.
#[must_use]
pub fn seconds_at(position: usize) -> f64 {
    (position as f64 / MEMORY_SAMPLES_PER_SECOND * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_version_has_a_style() {
        for version in Version::ALL {
            let style = version_style(version);
            assert!(style.label.starts_with(version.strategy.as_str()));
            assert!(style.label.contains(version.profile.flag()));
            assert!(style.color.starts_with('#'));
        }
    }

    #[test]
    fn test_every_benchmark_has_text() {
        for benchmark in Benchmark::ALL {
            assert!(benchmark_text(benchmark).title.starts_with(benchmark.name()));
        }
        assert_eq!(
            benchmark_text(Benchmark::MatrixMultiplication).x_label,
            "Matrix size (NxN)"
        );
    }

    #[test]
    fn test_marker_labels() {
        assert_eq!(marker_label(Benchmark::Fibonacci, 20), "Fib(20)");
        assert_eq!(
            marker_label(Benchmark::MatrixMultiplication, 25),
            "(25x25) matrix"
        );
        assert_eq!(marker_label(Benchmark::SpawnManyActors, 100), "100 actors");
    }

    #[test]
    fn test_seconds_at() {
        assert!((seconds_at(60) - 1.0).abs() < f64::EPSILON);
        assert!((seconds_at(100) - 1.67).abs() < 1e-12);
    }
}
