//! CLI definitions and entry point.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

/// Benchmark log statistics for GCD vs Swift Concurrency experiments
#[derive(Parser, Debug)]
#[command(name = "benchstats", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data root holding the log directories
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/benchstats.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Warm-up samples dropped from the start of every run
    #[arg(long, global = true)]
    pub discard: Option<usize>,

    /// Normal quantile used for intervals (1.96 = 95%, 3.291 = 99.9%)
    #[arg(long = "z", global = true)]
    pub z_multiplier: Option<f64>,

    /// Trial count assumed on both sides of a comparison
    #[arg(long, global = true)]
    pub trials: Option<u32>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Append an uncolored copy of the log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plot-ready mean and confidence band per benchmark parameter
    Series(SeriesArgs),

    /// LaTeX tables of GCD - SC differences for every common parameter
    Compare(CompareArgs),

    /// Memory consumption profile of one version
    Memory(MemoryArgs),

    /// Runs extracted from a single log file
    Runs(RunsArgs),
}

/// Output format for the series command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SeriesFormat {
    /// Aligned text (default)
    #[default]
    Text,
    /// `version,parameter,mean,ci_lower,ci_upper`
    Csv,
    /// Chart metadata plus points
    Json,
}

/// Output format for the compare command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CompareFormat {
    /// LaTeX `table` blocks (default)
    #[default]
    Latex,
    /// Comparison grids as JSON
    Json,
}

/// Output format for the memory command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum MemoryFormat {
    /// `index,seconds,megabytes` (default)
    #[default]
    Csv,
    /// Samples with labeled markers
    Json,
}

/// Output format for the runs command.
#[derive(ValueEnum, Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum RunsFormat {
    /// One line per run (default)
    #[default]
    Text,
    /// Runs with summaries as JSON
    Json,
}

/// Arguments for the series command.
#[derive(Args, Debug, Clone)]
pub struct SeriesArgs {
    /// Benchmark name (e.g. NQueens)
    pub benchmark: String,

    /// Versions to include (can be repeated; default: all six)
    #[arg(long = "version", short = 'V')]
    pub versions: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: SeriesFormat,
}

/// Arguments for the compare command.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Benchmark name (e.g. Fibonacci)
    pub benchmark: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: CompareFormat,

    /// Exit successfully even if some parameters could not be compared
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the memory command.
#[derive(Args, Debug, Clone)]
pub struct MemoryArgs {
    /// Benchmark name (e.g. SpawnManyActors)
    pub benchmark: String,

    /// Version to read (e.g. SC_opt_speed)
    #[arg(long = "version", short = 'V')]
    pub version: String,

    /// Only emit samples before the run of this benchmark parameter
    #[arg(long, value_name = "PARAMETER")]
    pub zoom: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: MemoryFormat,
}

/// Arguments for the runs command.
#[derive(Args, Debug, Clone)]
pub struct RunsArgs {
    /// Timing log to read
    pub path: PathBuf,

    /// Benchmark the log belongs to (decides matrix header parsing)
    #[arg(long)]
    pub benchmark: Option<String>,

    /// Skip sample lines without a numeric token instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: RunsFormat,
}
