//! Run extraction from benchmark timing logs.
//!
//! # Log Grammar
//!
//! - `Running ...` opens a run. The header carries `<param> <iterations>` as
//!   two embedded integers, or `(<n>x<n>) ... <iterations>` as three for the
//!   two-dimensional (matrix) benchmark
//! - Every other non-blank line inside a run is one iteration sample; the
//!   first decimal number on the line is the sample
//! - A line containing `average` closes the run; the reported average is the
//!   number right before `seconds`
//! - `Benchmark done` ends the log; anything after it is ignored
//!
//! Lines outside a run are ignored. A run left open at end of input is
//! dropped.
//!
//! # Modes
//!
//! [`ExtractMode::Strict`] fails on a sample line without a number (plotting
//! path), [`ExtractMode::Lenient`] skips it (statistics path).

pub mod memory;

use crate::error::{BenchError, Result};
use crate::model::{Benchmark, RunRecord, Series};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, trace, warn};

/// Substring of benchmark names whose headers carry a duplicated matrix side.
pub const TWO_DIMENSIONAL_MARKER: &str = "MatrixMultiplication";

const RUN_MARKER: &str = "Running";
const AVERAGE_MARKER: &str = "average";
const DONE_MARKER: &str = "Benchmark done";

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("integer regex"));
static SAMPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.?\d*(?:e-?)?\d+").expect("sample regex"));
static AVERAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.?\d*(?:e-?)?\d+) seconds").expect("average regex")
});

/// Whether a benchmark name (or header line) denotes the matrix benchmark.
#[must_use]
pub fn is_two_dimensional(name: &str) -> bool {
    name.contains(TWO_DIMENSIONAL_MARKER)
}

/// How sample lines without a number are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractMode {
    /// Fail with `MalformedSampleLine`.
    #[default]
    Strict,
    /// Skip the line.
    Lenient,
}

/// Extracts [`RunRecord`]s from the lines of one timing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    mode: ExtractMode,
    /// `None` means: decide per header line.
    two_dimensional: Option<bool>,
}

impl Extractor {
    #[must_use]
    pub const fn new(mode: ExtractMode) -> Self {
        Self {
            mode,
            two_dimensional: None,
        }
    }

    #[must_use]
    pub const fn strict() -> Self {
        Self::new(ExtractMode::Strict)
    }

    #[must_use]
    pub const fn lenient() -> Self {
        Self::new(ExtractMode::Lenient)
    }

    /// Bind the extractor to a catalog benchmark.
    #[must_use]
    pub fn for_benchmark(self, benchmark: Benchmark) -> Self {
        self.for_benchmark_name(benchmark.name())
    }

    /// Bind the extractor to a benchmark by name.
    #[must_use]
    pub fn for_benchmark_name(mut self, name: &str) -> Self {
        self.two_dimensional = Some(is_two_dimensional(name));
        self
    }

    #[must_use]
    pub const fn mode(&self) -> ExtractMode {
        self.mode
    }

    /// Lazily extract runs from a line sequence.
    ///
    /// The iterator ends after the first error.
    pub fn runs<I, L>(&self, lines: I) -> Runs<I::IntoIter>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        Runs {
            lines: lines.into_iter(),
            parser: RunParser::new(*self),
            line_no: 0,
            finished: false,
        }
    }

    /// Collect all runs of a line sequence into a [`Series`].
    ///
    /// # Errors
    ///
    /// Returns the first parse error; no partial series is produced.
    pub fn series<I, L>(&self, lines: I) -> Result<Series>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        self.runs(lines).collect()
    }

    /// Read every run of a log file in file order.
    ///
    /// # Errors
    ///
    /// Returns `LogNotFound` if the file is missing, or the first I/O or
    /// parse error wrapped with the file path.
    pub fn read_records(&self, path: &Path) -> Result<Vec<RunRecord>> {
        if !path.is_file() {
            return Err(BenchError::LogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| BenchError::from(e).in_file(path))?;
        let reader = BufReader::new(file);
        let mut parser = RunParser::new(*self);
        let mut records = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| BenchError::from(e).in_file(path))?;
            match parser.feed(idx + 1, &line).map_err(|e| e.in_file(path))? {
                Step::Skip => {}
                Step::Emit(record) => records.push(record),
                Step::Done => break,
            }
        }
        parser.finish();

        info!(
            path = %path.display(),
            runs = records.len(),
            mode = ?self.mode,
            "Extracted runs"
        );
        Ok(records)
    }

    /// Read a log file into a [`Series`].
    ///
    /// # Errors
    ///
    /// See [`Extractor::read_records`].
    pub fn read_series(&self, path: &Path) -> Result<Series> {
        Ok(self.read_records(path)?.into_iter().collect())
    }
}

/// Lazy run iterator returned by [`Extractor::runs`].
#[derive(Debug)]
pub struct Runs<I> {
    lines: I,
    parser: RunParser,
    line_no: usize,
    finished: bool,
}

impl<I, L> Iterator for Runs<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
    type Item = Result<RunRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_no += 1;
            match self.parser.feed(self.line_no, line.as_ref()) {
                Ok(Step::Skip) => {}
                Ok(Step::Emit(record)) => return Some(Ok(record)),
                Ok(Step::Done) => {
                    self.finished = true;
                    return None;
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }

        self.finished = true;
        self.parser.finish();
        None
    }
}

impl<I, L> FusedIterator for Runs<I>
where
    I: Iterator<Item = L>,
    L: AsRef<str>,
{
}

/// Outcome of feeding one line.
#[derive(Debug)]
enum Step {
    Skip,
    Emit(RunRecord),
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Header {
    line: usize,
    parameter: u64,
    iterations: u64,
}

/// Line-at-a-time state machine shared by the lazy and file readers.
#[derive(Debug)]
struct RunParser {
    extractor: Extractor,
    /// Header of the open run, `None` between runs.
    open: Option<Header>,
    samples: Vec<f64>,
}

impl RunParser {
    const fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            open: None,
            samples: Vec::new(),
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<Step> {
        if line.starts_with(RUN_MARKER) {
            let header = self.parse_header(line_no, line)?;
            self.drop_open_run();
            trace!(
                line = line_no,
                parameter = header.parameter,
                iterations = header.iterations,
                "Run started"
            );
            self.open = Some(header);
            return Ok(Step::Skip);
        }

        if line.contains(AVERAGE_MARKER) {
            let header = self
                .open
                .take()
                .ok_or(BenchError::OrphanAverage { line: line_no })?;
            let reported_average = parse_average(line_no, line)?;
            let record = RunRecord {
                benchmark_parameter: header.parameter,
                iteration_count: header.iterations,
                samples: std::mem::take(&mut self.samples),
                reported_average,
            };
            debug!(
                parameter = record.benchmark_parameter,
                samples = record.samples.len(),
                average = record.reported_average,
                "Run extracted"
            );
            return Ok(Step::Emit(record));
        }

        if line.contains(DONE_MARKER) {
            trace!(line = line_no, "Benchmark done");
            self.drop_open_run();
            return Ok(Step::Done);
        }

        if line.trim().is_empty() {
            return Ok(Step::Skip);
        }

        if self.open.is_none() {
            trace!(line = line_no, "Ignoring line outside a run");
            return Ok(Step::Skip);
        }

        match parse_sample(line) {
            Some(sample) => self.samples.push(sample),
            None => match self.extractor.mode {
                ExtractMode::Strict => {
                    return Err(BenchError::MalformedSampleLine {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
                ExtractMode::Lenient => {
                    trace!(line = line_no, "Skipping sample line without a number");
                }
            },
        }
        Ok(Step::Skip)
    }

    fn parse_header(&self, line_no: usize, line: &str) -> Result<Header> {
        let malformed = |reason: String| BenchError::MalformedRunHeader {
            line: line_no,
            reason,
        };

        let integers = INTEGER_RE
            .find_iter(line)
            .map(|m| m.as_str().parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| malformed(format!("integer out of range: {e}")))?;

        let two_dimensional = self
            .extractor
            .two_dimensional
            .unwrap_or_else(|| is_two_dimensional(line));

        match (two_dimensional, integers.as_slice()) {
            (true, &[side, other, iterations]) => {
                if side == other {
                    Ok(Header {
                        line: line_no,
                        parameter: side,
                        iterations,
                    })
                } else {
                    Err(malformed(format!(
                        "matrix is not square: {side}x{other}"
                    )))
                }
            }
            (false, &[parameter, iterations]) => Ok(Header {
                line: line_no,
                parameter,
                iterations,
            }),
            (true, found) => Err(malformed(format!(
                "expected 3 integers, found {}",
                found.len()
            ))),
            (false, found) => Err(malformed(format!(
                "expected 2 integers, found {}",
                found.len()
            ))),
        }
    }

    /// Forget a run whose `average` line never came.
    fn drop_open_run(&mut self) {
        if let Some(header) = self.open.take() {
            warn!(
                line = header.line,
                parameter = header.parameter,
                samples = self.samples.len(),
                "Dropping run without an average line"
            );
        }
        self.samples.clear();
    }

    fn finish(&mut self) {
        self.drop_open_run();
    }
}

fn parse_sample(line: &str) -> Option<f64> {
    SAMPLE_RE
        .find(line)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn parse_average(line_no: usize, line: &str) -> Result<f64> {
    AVERAGE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| BenchError::MissingAverage {
            line: line_no,
            content: line.to_string(),
        })
}
