//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of a sync report
//! - One entry per rewritten constraint

use crate::domain::SyncReport;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbose output includes the full lines
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput {
    dry_run: bool,
    written: bool,
    lock_file: String,
    manifest: String,
    summary: JsonSummary,
    changes: Vec<JsonChange>,
}

/// JSON representation of summary statistics
#[derive(Serialize)]
struct JsonSummary {
    /// Number of rewritten constraints
    changes: usize,
    /// Number of distinct packages touched
    packages: usize,
    /// Number of packages resolved by the lock
    locked: usize,
}

/// JSON representation of one rewritten constraint
#[derive(Serialize)]
struct JsonChange {
    name: String,
    section: String,
    line: usize,
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    old_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_line: Option<String>,
}

impl JsonFormatter {
    fn summary(report: &SyncReport) -> JsonSummary {
        JsonSummary {
            changes: report.change_count(),
            packages: report.packages().len(),
            locked: report.locked_packages,
        }
    }

    fn changes(&self, report: &SyncReport) -> Vec<JsonChange> {
        let verbose = self.verbosity == Verbosity::Verbose;
        report
            .changes
            .iter()
            .map(|change| JsonChange {
                name: change.package.clone(),
                section: change.section.to_string(),
                line: change.line_number,
                from: change.old_constraint.clone(),
                to: change.new_constraint.clone(),
                old_line: verbose.then(|| change.old_line.clone()),
                new_line: verbose.then(|| change.new_line.clone()),
            })
            .collect()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dry_run: report.dry_run,
            written: report.written,
            lock_file: report.lock_path.display().to_string(),
            manifest: report.manifest_path.display().to_string(),
            summary: Self::summary(report),
            changes: self.changes(report),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_summary(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let json =
            serde_json::to_string_pretty(&Self::summary(report)).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
