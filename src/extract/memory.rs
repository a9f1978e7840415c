//! Memory profile extraction from memory consumption logs.
//!
//! Each `..., mem: <megabytes>` line is one sample, taken once per frame.
//! A line containing `Running` marks where the next run started in the
//! sample stream; its first integer is the run's benchmark parameter.

use super::{INTEGER_RE, RUN_MARKER};
use crate::error::{BenchError, Result};
use crate::model::{MemoryMarker, MemoryProfile};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const MEMORY_MARKER: &str = "mem: ";

/// Build a memory profile from a line sequence.
///
/// # Errors
///
/// Returns `MalformedMemoryLine` for a `mem:` value that is not a number,
/// and `MalformedRunHeader` for a `Running` line without a parameter and
/// an iteration count.
pub fn memory_profile<I, L>(lines: I) -> Result<MemoryProfile>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut profile = MemoryProfile::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_no = idx + 1;

        if let Some(value) = line.split(MEMORY_MARKER).nth(1) {
            let megabytes = value.trim().parse::<f64>().map_err(|_| {
                BenchError::MalformedMemoryLine {
                    line: line_no,
                    content: line.to_string(),
                }
            })?;
            profile.samples.push(megabytes);
        }

        if line.contains(RUN_MARKER) {
            let marker = parse_marker(line_no, line, profile.samples.len())?;
            debug!(
                position = marker.position,
                parameter = marker.parameter,
                "Memory marker"
            );
            profile.markers.push(marker);
        }
    }

    Ok(profile)
}

/// Read a memory consumption log.
///
/// # Errors
///
/// Returns `LogNotFound` if the file is missing, otherwise any read or parse
/// error wrapped with the file path.
pub fn read_memory_profile(path: &Path) -> Result<MemoryProfile> {
    if !path.is_file() {
        return Err(BenchError::LogNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|e| BenchError::from(e).in_file(path))?;
    let profile = memory_profile(contents.lines()).map_err(|e| e.in_file(path))?;
    info!(
        path = %path.display(),
        samples = profile.samples.len(),
        markers = profile.markers.len(),
        "Extracted memory profile"
    );
    Ok(profile)
}

fn parse_marker(line_no: usize, line: &str, position: usize) -> Result<MemoryMarker> {
    let integers: Vec<&str> = INTEGER_RE.find_iter(line).map(|m| m.as_str()).collect();

    // The last integer is the iteration count; at least one parameter precedes it.
    if integers.len() < 2 {
        return Err(BenchError::MalformedRunHeader {
            line: line_no,
            reason: format!("expected at least 2 integers, found {}", integers.len()),
        });
    }

    let parameter = integers[0]
        .parse::<u64>()
        .map_err(|e| BenchError::MalformedRunHeader {
            line: line_no,
            reason: format!("integer out of range: {e}"),
        })?;

    Ok(MemoryMarker {
        position,
        parameter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_and_markers() {
        let lines = [
            "2022-05-01 10:00:00 +0000, mem: 12.5",
            "Running BenchApp.NQueens:runAsync with 8 queens and 110 iteration(s).",
            "2022-05-01 10:00:01 +0000, mem: 14.0",
            "2022-05-01 10:00:02 +0000, mem: 15.25",
            "Running BenchApp.NQueens:runAsync with 10 queens and 110 iteration(s).",
            "2022-05-01 10:00:03 +0000, mem: 13",
        ];
        let profile = memory_profile(lines).unwrap();
        assert_eq!(profile.samples, vec![12.5, 14.0, 15.25, 13.0]);
        assert_eq!(
            profile.markers,
            vec![
                MemoryMarker {
                    position: 1,
                    parameter: 8
                },
                MemoryMarker {
                    position: 3,
                    parameter: 10
                },
            ]
        );
    }

    #[test]
    fn test_matrix_marker_uses_first_side() {
        let lines = ["Running BenchApp.MatrixMultiplication:runGCD with (50x50) matrix and 110 iteration(s)."];
        let profile = memory_profile(lines).unwrap();
        assert_eq!(profile.markers[0].parameter, 50);
        assert_eq!(profile.markers[0].position, 0);
    }

    #[test]
    fn test_malformed_memory_value() {
        let err = memory_profile(["t, mem: lots"]).unwrap_err();
        assert!(matches!(err, BenchError::MalformedMemoryLine { line: 1, .. }));
    }

    #[test]
    fn test_marker_without_parameter() {
        let err = memory_profile(["Running 110 iteration(s)."]).unwrap_err();
        assert!(matches!(err, BenchError::MalformedRunHeader { line: 1, .. }));
    }
}
