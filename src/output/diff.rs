//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified diff style display of rewritten lines
//! - One hunk per changed line

use crate::domain::{SyncReport, VersionChange};
use crate::output::OutputFormatter;
use std::io::Write;

/// Diff formatter for showing rewritten manifest lines
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }

    /// Changes grouped by line; one line may carry several rewrites
    fn changed_lines(report: &SyncReport) -> Vec<&VersionChange> {
        let mut lines: Vec<&VersionChange> = Vec::new();
        for change in &report.changes {
            if lines.last().map(|c| c.line_number) != Some(change.line_number) {
                lines.push(change);
            }
        }
        lines
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        if report.has_changes() {
            let path = report.manifest_path.display();
            writeln!(writer, "{}--- a/{}", prefix, path)?;
            writeln!(writer, "{}+++ b/{}", prefix, path)?;

            for change in Self::changed_lines(report) {
                writeln!(
                    writer,
                    "@@ -{line},1 +{line},1 @@ {}",
                    change.section,
                    line = change.line_number
                )?;
                writeln!(writer, "-{}", change.old_line)?;
                writeln!(writer, "+{}", change.new_line)?;
            }

            writeln!(writer)?;
        }

        self.format_summary(report, writer)
    }

    fn format_summary(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let verb = if report.written {
            "rewritten"
        } else {
            "would be rewritten"
        };
        writeln!(
            writer,
            "{}# {} constraint(s) {}",
            self.dry_run_prefix(),
            report.change_count(),
            verb
        )
    }
}
