//! CLI argument parsing module for depsync

use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Sync pyproject.toml versions with uv.lock or poetry.lock
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depsync",
    version,
    about = "Sync pyproject.toml dependency versions with uv.lock or poetry.lock"
)]
pub struct CliArgs {
    /// Lock file or project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    // General options
    /// Dry run mode - show what would be rewritten without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Exit with status 1 if the manifest is out of sync (implies --dry-run)
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long, conflicts_with = "diff")]
    pub json: bool,

    /// Show changes in diff format
    #[arg(long)]
    pub diff: bool,
}

impl CliArgs {
    /// Whether the manifest must be left untouched
    pub fn is_dry_run(&self) -> bool {
        self.dry_run || self.check
    }

    /// Log level for the terminal logger
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }
}
