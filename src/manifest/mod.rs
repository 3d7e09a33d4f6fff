//! pyproject.toml reading, collection and rewriting
//!
//! This module provides functionality to:
//! - Locate the manifest next to a lock file
//! - Collect declared base versions from PEP 621 / uv and Poetry tables
//! - Classify table headers into dependency sections
//! - Rewrite declared versions without disturbing the rest of the file

mod collector;
mod section;
mod writer;

pub use collector::{
    collect_dependency_specs, collect_from_value, collect_poetry_dependencies,
    collect_pyproject_versions, collect_uv_dependencies, poetry_dependency_specs,
    uv_dependency_specs,
};
pub use section::{
    is_dependency_section, parse_header, split_dotted_key, DependencySection, TableHeader,
};
pub use writer::{replace_pyproject_versions, rewrite_manifest, Rewrite};

use crate::domain::{VersionMapping, MANIFEST_FILENAME};
use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the pyproject.toml path in the lock file's directory
pub fn manifest_path_for(lock_path: &Path) -> PathBuf {
    match lock_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(MANIFEST_FILENAME),
        _ => PathBuf::from(".").join(MANIFEST_FILENAME),
    }
}

/// Read manifest file content
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}

/// Parses manifest content and collects declared base versions
pub fn parse_manifest(path: &Path, content: &str) -> Result<VersionMapping, ManifestError> {
    collect_pyproject_versions(content).map_err(|e| ManifestError::toml_parse_error(path, e))
}
