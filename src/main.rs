//! depsync - pyproject.toml version sync CLI tool
//!
//! This tool rewrites the versions declared in pyproject.toml to the
//! versions resolved by the project's lock file:
//! - uv (uv.lock)
//! - Poetry (poetry.lock)

use anyhow::Context;
use clap::Parser;
use depsync::cli::CliArgs;
use depsync::lock::resolve_lock_path;
use depsync::orchestrator::{SyncOptions, Synchronizer};
use depsync::output::{create_formatter, OutputConfig};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// Exit code when `--check` finds the manifest out of sync
const EXIT_OUT_OF_SYNC: u8 = 1;

/// Exit code when the run fails
const EXIT_ERROR: u8 = 2;

fn initialize_logger(args: &CliArgs) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("depsync")
        .build();

    simplelog::TermLogger::init(
        args.log_level(),
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    initialize_logger(&args)?;
    log::debug!("depsync v{}", env!("CARGO_PKG_VERSION"));

    let lock_path = resolve_lock_path(&args.path)?;
    log::debug!("using lock file {}", lock_path.display());

    let dry_run = args.is_dry_run();
    let synchronizer = Synchronizer::new(SyncOptions { dry_run });
    let report = synchronizer
        .sync(&lock_path)
        .with_context(|| format!("failed to sync {}", lock_path.display()))?;

    // Create output formatter based on CLI options
    let mut output_config =
        OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet, dry_run);
    output_config.color = io::stdout().is_terminal();
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if args.check && report.has_changes() {
        Ok(ExitCode::from(EXIT_OUT_OF_SYNC))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
