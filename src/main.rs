//! verup - version ordering and update selection CLI tool
//!
//! Given a declared version and the versions known for an artifact, prints
//! the version the artifact should move to under the selected policy.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use verup::cli::CliArgs;
use verup::orchestrator::Orchestrator;
use verup::output::{create_formatter, OutputConfig};

/// Environment variable holding the log filter
const LOG_ENV: &str = "VERUP_LOG";

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber; `--verbose` overrides the env filter
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("verup=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("verup v{}", env!("CARGO_PKG_VERSION"));
    }

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet)
        .with_color(io::stdout().is_terminal());

    let orchestrator = Orchestrator::new(args)?;
    let summary = orchestrator.run()?;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
