//! Sync orchestrator coordinating the whole workflow
//!
//! This module provides:
//! - Workflow coordination: select dialect → parse lock → collect → rewrite → write
//! - Dry-run mode support
//! - Reporting of every rewritten constraint

use crate::domain::{LockKind, SyncReport};
use crate::error::SyncError;
use crate::lock::parse_lock_file;
use crate::manifest::{
    manifest_path_for, parse_manifest, read_manifest, rewrite_manifest, write_manifest,
};
use std::path::Path;

/// Library-level options for a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Compute the report without writing the manifest
    pub dry_run: bool,
}

impl SyncOptions {
    /// Options for a run that never writes
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// Synchronizes pyproject.toml declarations with a lock file
pub struct Synchronizer {
    options: SyncOptions,
}

impl Synchronizer {
    /// Create a new synchronizer
    pub fn new(options: SyncOptions) -> Self {
        Self { options }
    }

    /// Run the sync for the lock file at `lock_path`
    ///
    /// The manifest is the `pyproject.toml` next to the lock file. Outside of
    /// dry-run mode it is written back even when no constraint changed.
    pub fn sync(&self, lock_path: &Path) -> Result<SyncReport, SyncError> {
        // Dialect selection comes first so an unsupported name never touches disk
        let kind = LockKind::from_path(lock_path)?;
        let manifest_path = manifest_path_for(lock_path);
        let mut report = SyncReport::new(lock_path, &manifest_path, kind, self.options.dry_run);

        let lock_versions = parse_lock_file(lock_path)?;
        report.locked_packages = lock_versions.len();
        log::debug!(
            "{} resolves {} packages",
            lock_path.display(),
            lock_versions.len()
        );

        let content = read_manifest(&manifest_path)?;
        let manifest_versions = parse_manifest(&manifest_path, &content)?;
        log::debug!(
            "{} declares {} versioned packages",
            manifest_path.display(),
            manifest_versions.len()
        );

        let rewrite = rewrite_manifest(&lock_versions, &manifest_versions, &content);
        report.changes = rewrite.changes;

        if self.options.dry_run {
            log::debug!("dry run, leaving {} untouched", manifest_path.display());
        } else {
            write_manifest(&manifest_path, &rewrite.content)?;
            report.written = true;
        }

        Ok(report)
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new(SyncOptions::default())
    }
}

/// Rewrites the manifest next to `lock_path` to the lock's resolved versions
pub fn replace_versions(lock_path: &Path) -> Result<SyncReport, SyncError> {
    Synchronizer::default().sync(lock_path)
}
