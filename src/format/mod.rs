//! Output formatting for `benchstats`.
//!
//! Supports LaTeX comparison tables, CSV and JSON for plotting, and plain
//! text summaries. Diagnostics always go to stderr so stdout carries only
//! the requested format.
//!
//! # Output Types
//!
//! - [`SeriesReport`] - Chart metadata plus points per version (series)
//! - [`ComparisonReport`] - 3×3 grids per common parameter (compare)
//! - [`MemoryReport`] - Memory samples with labeled run markers (memory)
//! - [`RunReport`] - One extracted run and its summary (runs)

pub mod csv;
pub mod latex;
mod output;
mod text;

pub use latex::{LatexTable, format_sci, latex_cell, latex_table};
pub use output::{
    CellReport, ComparisonReport, FailedParameter, GridReport, MarkerReport, MemoryReport,
    RunReport, SeriesReport, VersionSeries,
};
pub use text::{format_point_line, format_runs_text, format_series_text};
