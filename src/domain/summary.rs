//! Sync result summary types
//!
//! Provides structures for tracking rewritten constraints and the outcome
//! of a single sync run.

use super::{LockKind, SourceSection};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single rewritten version constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    /// Package name as written in the manifest
    pub package: String,
    /// Section the declaration was found in
    pub section: SourceSection,
    /// Line number in the manifest (1-indexed)
    pub line_number: usize,
    /// Constraint before the rewrite (e.g. `>=2.28.0`)
    pub old_constraint: String,
    /// Constraint after the rewrite (e.g. `>=2.31.0`)
    pub new_constraint: String,
    /// Full line before the rewrite
    pub old_line: String,
    /// Full line after the rewrite
    pub new_line: String,
}

/// Outcome of syncing one manifest against one lock file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Lock file the versions were read from
    pub lock_path: PathBuf,
    /// Manifest that was (or would be) rewritten
    pub manifest_path: PathBuf,
    /// Lock dialect
    pub lock_kind: LockKind,
    /// Number of packages resolved by the lock
    pub locked_packages: usize,
    /// Individual constraint rewrites, in file order
    pub changes: Vec<VersionChange>,
    /// Whether the manifest was written back
    pub written: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl SyncReport {
    /// Creates an empty report
    pub fn new(
        lock_path: impl Into<PathBuf>,
        manifest_path: impl Into<PathBuf>,
        lock_kind: LockKind,
        dry_run: bool,
    ) -> Self {
        Self {
            lock_path: lock_path.into(),
            manifest_path: manifest_path.into(),
            lock_kind,
            locked_packages: 0,
            changes: Vec::new(),
            written: false,
            dry_run,
        }
    }

    /// Returns the number of rewritten constraints
    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if any constraint differs from the lock
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Returns the distinct package names that were rewritten
    pub fn packages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for change in &self.changes {
            if !names.contains(&change.package.as_str()) {
                names.push(&change.package);
            }
        }
        names
    }
}
