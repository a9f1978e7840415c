use benchstats::cli::commands::{self, CommandContext};
use benchstats::cli::{Cli, Commands};
use benchstats::config;
use benchstats::logging::init_logging;
use benchstats::{BenchError, StructuredError};
use clap::Parser;
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let overrides = build_cli_overrides(&cli);

    let result = CommandContext::new(&cli.root, &overrides, cli.json).and_then(|ctx| {
        match &cli.command {
            Commands::Series(args) => commands::series::execute(args, &ctx),
            Commands::Compare(args) => commands::compare::execute(args, &ctx),
            Commands::Memory(args) => commands::memory::execute(args, &ctx),
            Commands::Runs(args) => commands::runs::execute(args, &ctx),
        }
    });

    if let Err(e) = result {
        handle_error(&e, cli.json);
    }
}

/// Handle errors with structured output support.
///
/// When --json is set or stdout is not a TTY, outputs structured JSON to stderr.
/// Otherwise, outputs human-readable error with optional color.
fn handle_error(err: &BenchError, json_mode: bool) -> ! {
    let structured = StructuredError::from_error(err);
    let exit_code = structured.code.exit_code();

    let use_json = json_mode || !io::stdout().is_terminal();

    if use_json {
        let json = structured.to_json();
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
        );
    } else {
        let use_color = io::stderr().is_terminal();
        eprintln!("{}", structured.to_human(use_color));
    }

    std::process::exit(exit_code);
}

fn build_cli_overrides(cli: &Cli) -> config::CliOverrides {
    config::CliOverrides {
        config: cli.config.clone(),
        warmup_discard: cli.discard,
        z_multiplier: cli.z_multiplier,
        assumed_trials: cli.trials,
    }
}
