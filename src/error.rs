//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LockError: Issues with selecting, reading or decoding the lock file
//! - ManifestError: Issues with reading, decoding or writing pyproject.toml

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for a sync run
#[derive(Error, Debug)]
pub enum SyncError {
    /// Lock file related errors
    #[error(transparent)]
    Lock(#[from] LockError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

impl SyncError {
    /// Returns true if the lock file name is not a supported dialect
    pub fn is_unsupported_lock(&self) -> bool {
        matches!(self, SyncError::Lock(LockError::UnsupportedLockFile { .. }))
    }

    /// Returns true if the error was caused by a missing file
    pub fn is_not_found(&self) -> bool {
        match self {
            SyncError::Lock(LockError::ReadError { source, .. }) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            SyncError::Lock(LockError::NotFound { .. }) => true,
            SyncError::Manifest(ManifestError::NotFound { .. }) => true,
            SyncError::Manifest(ManifestError::ReadError { source, .. }) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Errors related to lock file operations
#[derive(Error, Debug)]
pub enum LockError {
    /// Lock file name is neither `uv.lock` nor `poetry.lock`
    #[error("Unsupported lock file: {name}")]
    UnsupportedLockFile { name: String },

    /// Failed to read the lock file
    #[error("failed to read lock file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lock file is not valid TOML or lacks the package table shape
    #[error("failed to parse TOML in {path}: {source}")]
    TomlParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// No supported lock file in the given directory
    #[error("no uv.lock or poetry.lock found in {path}")]
    NotFound { path: PathBuf },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found next to the lock file
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML
    #[error("failed to parse TOML in {path}: {source}")]
    TomlParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LockError {
    /// Creates a new UnsupportedLockFile error
    pub fn unsupported(name: impl Into<String>) -> Self {
        LockError::UnsupportedLockFile { name: name.into() }
    }

    /// Creates a new NotFound error for a directory without a lock file
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        LockError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LockError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        LockError::TomlParseError {
            path: path.into(),
            source,
        }
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError, mapping a missing file to NotFound
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return ManifestError::not_found(path);
        }
        ManifestError::ReadError { path, source }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            source,
        }
    }
}
