//! Core domain models for depsync
//!
//! This module contains the fundamental types used throughout the crate:
//! - Lock file dialects and their file names
//! - Version constraint types that preserve formatting on rewrite
//! - Dependency declaration records
//! - Sync result and change records

mod dependency;
mod lock_kind;
mod summary;
mod version_spec;

pub use dependency::{normalize_name, DependencySpec, SourceSection};
pub use lock_kind::{LockKind, MANIFEST_FILENAME};
pub use summary::{SyncReport, VersionChange};
pub use version_spec::{VersionSpec, VersionSpecKind};

use std::collections::HashMap;

/// Normalized package name → exact version resolved by the lock file
pub type ResolvedVersions = HashMap<String, String>;

/// Normalized package name → base version currently declared in the manifest
pub type VersionMapping = HashMap<String, String>;
