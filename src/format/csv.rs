//! CSV formatting for plot-ready data.
//!
//! Series rows carry `version,parameter,mean,ci_lower,ci_upper`; memory rows
//! carry `index,seconds,megabytes`. Numbers use the shortest round-trip
//! representation.

use crate::config::catalog::seconds_at;
use crate::model::{MemoryProfile, SeriesPoint, Version};
use std::io::{self, Write};

/// Header of series CSV output.
pub const SERIES_FIELDS: &[&str] = &["version", "parameter", "mean", "ci_lower", "ci_upper"];

/// Header of memory CSV output.
pub const MEMORY_FIELDS: &[&str] = &["index", "seconds", "megabytes"];

/// Escape a CSV field value.
///
/// Wraps in double quotes if the value contains commas, quotes, or newlines.
/// Doubles any existing quotes within the value.
#[must_use]
pub fn escape_field(value: &str) -> String {
    let needs_quoting = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Write CSV header row to the given writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_header<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    let header = fields.join(",");
    writeln!(writer, "{header}")
}

/// Format one series point as a CSV row.
#[must_use]
pub fn format_point_row(version: Version, point: &SeriesPoint) -> String {
    [
        escape_field(&version.to_string()),
        point.parameter.to_string(),
        point.mean.to_string(),
        point.ci_lower.to_string(),
        point.ci_upper.to_string(),
    ]
    .join(",")
}

/// Write the points of several versions under one header.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_series_csv<W: Write>(
    writer: &mut W,
    series: &[(Version, Vec<SeriesPoint>)],
) -> io::Result<()> {
    write_header(writer, SERIES_FIELDS)?;
    for (version, points) in series {
        for point in points {
            writeln!(writer, "{}", format_point_row(*version, point))?;
        }
    }
    Ok(())
}

/// Write a memory profile, one row per sample.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_memory_csv<W: Write>(writer: &mut W, profile: &MemoryProfile) -> io::Result<()> {
    write_header(writer, MEMORY_FIELDS)?;
    for (index, megabytes) in profile.samples.iter().enumerate() {
        writeln!(writer, "{index},{},{megabytes}", seconds_at(index))?;
    }
    Ok(())
}
