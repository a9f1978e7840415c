use crate::config::catalog::{
    self, MEMORY_AXIS_LABEL, MEMORY_FILL_COLOR, MEMORY_LINE_COLOR, MEMORY_SAMPLES_PER_SECOND,
    MEMORY_TIME_AXIS_LABEL, RUNTIME_AXIS_LABEL,
};
use crate::model::{
    Benchmark, ComparisonCell, MemoryProfile, RunRecord, RunSummary, SeriesPoint, Strategy,
    Version,
};
use crate::stats::ComparisonGrid;
use serde::{Deserialize, Serialize};

/// Chart metadata plus points of every requested version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesReport {
    pub benchmark: Benchmark,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<VersionSeries>,
}

/// Points of one version with its plot style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSeries {
    pub version: Version,
    pub label: String,
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

impl SeriesReport {
    #[must_use]
    pub fn new(benchmark: Benchmark, series: Vec<(Version, Vec<SeriesPoint>)>) -> Self {
        let text = catalog::benchmark_text(benchmark);
        Self {
            benchmark,
            title: text.title.to_string(),
            x_label: text.x_label.to_string(),
            y_label: RUNTIME_AXIS_LABEL.to_string(),
            series: series
                .into_iter()
                .map(|(version, points)| {
                    let style = catalog::version_style(version);
                    VersionSeries {
                        version,
                        label: style.label.to_string(),
                        color: style.color.to_string(),
                        points,
                    }
                })
                .collect(),
        }
    }
}

/// One comparison cell with its shading decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellReport {
    pub difference: f64,
    pub error_margin: f64,
    pub inconclusive: bool,
}

impl From<&ComparisonCell> for CellReport {
    fn from(cell: &ComparisonCell) -> Self {
        Self {
            difference: cell.difference,
            error_margin: cell.error_margin,
            inconclusive: cell.is_inconclusive(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridReport {
    pub parameter: u64,
    /// Cells whose interval contains zero.
    pub inconclusive: usize,
    /// Row-major, rows follow `ComparisonReport::rows`.
    pub cells: Vec<Vec<CellReport>>,
}

impl From<&ComparisonGrid> for GridReport {
    fn from(grid: &ComparisonGrid) -> Self {
        Self {
            parameter: grid.parameter,
            inconclusive: grid.inconclusive_count(),
            cells: grid
                .cells
                .iter()
                .map(|row| row.iter().map(CellReport::from).collect())
                .collect(),
        }
    }
}

/// A parameter whose grid could not be produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedParameter {
    pub parameter: u64,
    pub error: String,
}

/// All comparison grids of a benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub benchmark: Benchmark,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub grids: Vec<GridReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<FailedParameter>,
}

impl ComparisonReport {
    #[must_use]
    pub fn new(
        benchmark: Benchmark,
        grids: &[ComparisonGrid],
        failed: Vec<FailedParameter>,
    ) -> Self {
        let labels = |strategy| {
            Version::group(strategy)
                .iter()
                .map(|v| catalog::version_style(*v).label.to_string())
                .collect()
        };
        Self {
            benchmark,
            rows: labels(Strategy::Gcd),
            columns: labels(Strategy::SwiftConcurrency),
            grids: grids.iter().map(GridReport::from).collect(),
            failed,
        }
    }
}

/// A run marker positioned on the time axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerReport {
    pub position: usize,
    pub seconds: f64,
    pub parameter: u64,
    pub label: String,
}

/// Memory profile of one version with chart metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryReport {
    pub benchmark: Benchmark,
    pub version: Version,
    pub title: String,
    pub label: String,
    pub x_label: String,
    pub y_label: String,
    pub fill_color: String,
    pub line_color: String,
    pub samples_per_second: f64,
    pub peak: Option<f64>,
    pub samples: Vec<f64>,
    pub markers: Vec<MarkerReport>,
}

impl MemoryReport {
    #[must_use]
    pub fn new(benchmark: Benchmark, version: Version, profile: MemoryProfile) -> Self {
        let markers = profile
            .markers
            .iter()
            .map(|marker| MarkerReport {
                position: marker.position,
                seconds: catalog::seconds_at(marker.position),
                parameter: marker.parameter,
                label: catalog::marker_label(benchmark, marker.parameter),
            })
            .collect();
        Self {
            benchmark,
            version,
            title: catalog::memory_title(benchmark),
            label: catalog::version_style(version).label.to_string(),
            x_label: MEMORY_TIME_AXIS_LABEL.to_string(),
            y_label: MEMORY_AXIS_LABEL.to_string(),
            fill_color: MEMORY_FILL_COLOR.to_string(),
            line_color: MEMORY_LINE_COLOR.to_string(),
            samples_per_second: MEMORY_SAMPLES_PER_SECOND,
            peak: profile.peak(),
            samples: profile.samples,
            markers,
        }
    }
}

/// One extracted run with its summary, or the reason it has none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub parameter: u64,
    pub iteration_count: u64,
    pub sample_count: usize,
    pub reported_average: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<RunSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunReport {
    #[must_use]
    pub fn new(record: &RunRecord, summary: crate::Result<RunSummary>) -> Self {
        let (summary, error) = match summary {
            Ok(summary) => (Some(summary), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            parameter: record.benchmark_parameter,
            iteration_count: record.iteration_count,
            sample_count: record.samples.len(),
            reported_average: record.reported_average,
            summary,
            error,
        }
    }
}
