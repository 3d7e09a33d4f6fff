//! Lock file parsing
//!
//! `uv.lock` and `poetry.lock` share the same repeated-table shape:
//!
//! ```toml
//! [[package]]
//! name = "requests"
//! version = "2.31.0"
//! ```
//!
//! so a single routine parses both once the dialect is known from the
//! file name. Every other field (including the top-level `version` schema
//! marker of `uv.lock`) is ignored.

use crate::domain::{normalize_name, LockKind, ResolvedVersions};
use crate::error::LockError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A `[[package]]` entry
#[derive(Debug, Deserialize)]
struct LockPackage {
    name: String,
    /// Virtual workspace roots in uv.lock carry no version
    version: Option<String>,
}

/// A TOML lock file with `[[package]]` arrays
#[derive(Debug, Deserialize)]
struct LockFile {
    #[serde(default)]
    package: Vec<LockPackage>,
}

/// Parses a lock file into normalized package name → resolved version
///
/// The dialect is chosen from the file name before anything is read, so an
/// unsupported name fails even when the file does not exist.
pub fn parse_lock_file(path: &Path) -> Result<ResolvedVersions, LockError> {
    let kind = LockKind::from_path(path)?;
    log::debug!("parsing {} lock file {}", kind, path.display());

    let content = fs::read_to_string(path).map_err(|e| LockError::read_error(path, e))?;
    parse_lock_content(&content).map_err(|e| LockError::toml_parse_error(path, e))
}

/// Parses lock file content; first occurrence of a package wins
pub fn parse_lock_content(content: &str) -> Result<ResolvedVersions, toml::de::Error> {
    let lock_file: LockFile = toml::from_str(content)?;

    let mut versions = ResolvedVersions::new();
    for package in lock_file.package {
        let Some(version) = package.version else {
            log::debug!("skipping {} without a version", package.name);
            continue;
        };
        versions
            .entry(normalize_name(&package.name))
            .or_insert(version);
    }

    Ok(versions)
}

/// Resolves a user-supplied path to a lock file
///
/// A directory is searched for `uv.lock` first, then `poetry.lock`. Any
/// other path is returned as-is so that dialect selection can reject it.
pub fn resolve_lock_path(path: &Path) -> Result<PathBuf, LockError> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }

    LockKind::all()
        .iter()
        .map(|kind| path.join(kind.lock_filename()))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| LockError::not_found(path))
}
