//! Cross-profile comparison of two strategy groups.
//!
//! Each group holds the three optimization profiles of one strategy in
//! [`OptProfile::ORDER`](crate::model::OptProfile::ORDER). For a shared
//! benchmark parameter the grid compares every row profile of group A with
//! every column profile of group B.

use super::{compare_means_with, summarize_run};
use crate::config::AnalysisConfig;
use crate::error::{BenchError, Result};
use crate::model::{ComparisonCell, RunSummary, Series};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// 3×3 comparison cells for one benchmark parameter.
///
/// `cells[row][col]` holds group A's profile `row` minus group B's
/// profile `col`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonGrid {
    pub parameter: u64,
    pub cells: [[ComparisonCell; 3]; 3],
}

impl ComparisonGrid {
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> &ComparisonCell {
        &self.cells[row][col]
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &ComparisonCell> {
        self.cells.iter().flatten()
    }

    /// Number of cells whose interval contains zero.
    #[must_use]
    pub fn inconclusive_count(&self) -> usize {
        self.iter().filter(|cell| cell.is_inconclusive()).count()
    }
}

/// Parameters present in every given series, ascending.
#[must_use]
pub fn common_parameters(series: &[&Series]) -> Vec<u64> {
    let Some((first, rest)) = series.split_first() else {
        return Vec::new();
    };
    let mut common: BTreeSet<u64> = first.parameters().collect();
    for other in rest {
        common.retain(|parameter| other.contains(*parameter));
    }
    common.into_iter().collect()
}

/// Build the comparison grid for one parameter.
///
/// # Errors
///
/// Returns `ParameterMissing` if a series has no run for `parameter`,
/// otherwise the first statistics failure among the six runs; the grid for
/// this parameter is then not produced.
pub fn compare_at(
    parameter: u64,
    group_a: [&Series; 3],
    group_b: [&Series; 3],
    config: &AnalysisConfig,
) -> Result<ComparisonGrid> {
    let summarize = |series: &Series| -> Result<RunSummary> {
        let record = series
            .get(parameter)
            .ok_or(BenchError::ParameterMissing { parameter })?;
        summarize_run(record, config)
    };

    let rows = [
        summarize(group_a[0])?,
        summarize(group_a[1])?,
        summarize(group_a[2])?,
    ];
    let cols = [
        summarize(group_b[0])?,
        summarize(group_b[1])?,
        summarize(group_b[2])?,
    ];

    let trials = config.assumed_trials;
    let cells = rows.map(|a| {
        cols.map(|b| {
            compare_means_with(
                a.mean,
                a.variance,
                b.mean,
                b.variance,
                trials,
                trials,
                config.z_multiplier,
            )
        })
    });

    Ok(ComparisonGrid { parameter, cells })
}

/// Compare two strategy groups at every parameter common to all six series.
///
/// A failure at one parameter is returned in that parameter's slot and does
/// not affect the others.
#[must_use]
pub fn cross_compare(
    group_a: [&Series; 3],
    group_b: [&Series; 3],
    config: &AnalysisConfig,
) -> Vec<(u64, Result<ComparisonGrid>)> {
    let all: Vec<&Series> = group_a.iter().chain(group_b.iter()).copied().collect();
    let parameters = common_parameters(&all);
    debug!(parameters = ?parameters, "Comparing common parameters");

    parameters
        .into_iter()
        .map(|parameter| {
            let grid = compare_at(parameter, group_a, group_b, config);
            if let Err(err) = &grid {
                warn!(parameter, error = %err, "Comparison failed");
            }
            (parameter, grid)
        })
        .collect()
}
