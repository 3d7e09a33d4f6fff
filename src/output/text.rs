//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-constraint change display with colors
//! - Version change type indication (major/minor/patch)
//! - Section and line details in verbose mode
//! - Summary line

use crate::domain::{SyncReport, VersionChange};
use crate::output::{OutputFormatter, Verbosity};
use crate::parser::extract_base_version;
use colored::Colorize;
use std::io::Write;

/// Version change type between two base versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Lower than the declared base (lock behind manifest)
    Downgrade,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (release_parts(old), release_parts(new)) {
            (Some(old), Some(new)) if new < old => VersionChangeType::Downgrade,
            (Some(old), Some(new)) => {
                if new[0] != old[0] {
                    VersionChangeType::Major
                } else if new[1] != old[1] {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Downgrade => "downgrade".magenta().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Downgrade => "downgrade",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Numeric release segments padded to three, pre/post-release tags dropped
fn release_parts(version: &str) -> Option<[u64; 3]> {
    let release = version
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .next()
        .unwrap_or_default();
    let mut parts = [0u64; 3];
    let mut segments = release.split('.').filter(|s| !s.is_empty());

    parts[0] = segments.next()?.parse().ok()?;
    for part in parts.iter_mut().skip(1) {
        match segments.next() {
            Some(segment) => *part = segment.parse().ok()?,
            None => break,
        }
    }
    Some(parts)
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    fn max_name_length(changes: &[VersionChange]) -> usize {
        changes.iter().map(|c| c.package.len()).max().unwrap_or(0)
    }

    /// Format a single change line
    fn format_change_line(
        &self,
        change: &VersionChange,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let change_type = VersionChangeType::from_versions(
            &extract_base_version(&change.old_constraint),
            &extract_base_version(&change.new_constraint),
        );
        let location = if self.verbosity == Verbosity::Verbose {
            format!(" {}:{}", change.section, change.line_number)
        } else {
            String::new()
        };

        if self.color {
            let name_display = format!("{:width$}", change.package, width = max_name_len);
            writeln!(
                writer,
                "  {} {} {} {} [{}]{}",
                name_display,
                change.old_constraint.dimmed(),
                "→".dimmed(),
                change.new_constraint.bright_white().bold(),
                change_type.colored_label(),
                location.dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]{}",
                change.package,
                change.old_constraint,
                change.new_constraint,
                change_type.label(),
                location,
                width = max_name_len
            )
        }
    }

    fn format_header(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        let path_display = report.manifest_path.display().to_string();
        let lock_display = format!("({})", report.lock_kind.lock_filename());

        if self.color {
            writeln!(
                writer,
                "{}{} {}",
                prefix,
                path_display.bold(),
                lock_display.dimmed()
            )
        } else {
            writeln!(writer, "{}{} {}", prefix, path_display, lock_display)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        // In quiet mode, only show summary
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(report, writer);
        }

        if report.has_changes() {
            self.format_header(report, writer)?;
            let max_name_len = Self::max_name_length(&report.changes).max(20);
            for change in &report.changes {
                self.format_change_line(change, max_name_len, writer)?;
            }
            writeln!(writer)?;
        }

        self.format_summary(report, writer)
    }

    fn format_summary(&self, report: &SyncReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();
        let count = report.change_count();
        let lock = report.lock_kind.lock_filename();

        if count == 0 {
            if self.color {
                writeln!(writer, "{}{} {}", prefix, "Already in sync with".dimmed(), lock)?;
            } else {
                writeln!(writer, "{}Already in sync with {}", prefix, lock)?;
            }
            return Ok(());
        }

        let verb = if report.written { "synced" } else { "out of sync" };
        if self.color {
            writeln!(
                writer,
                "{}{} constraint(s) {} with {}",
                prefix,
                count.to_string().green(),
                verb,
                lock
            )?;
        } else {
            writeln!(
                writer,
                "{}{} constraint(s) {} with {}",
                prefix, count, verb, lock
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "  {} package(s) resolved in {}",
                report.locked_packages,
                report.lock_path.display()
            )?;
        }

        Ok(())
    }
}
