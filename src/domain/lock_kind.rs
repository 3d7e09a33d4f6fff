//! Lock file dialects

use crate::error::LockError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Manifest file that sits next to every supported lock file
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Supported lock file dialects, selected by file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockKind {
    /// uv (`uv.lock`)
    Uv,
    /// Poetry (`poetry.lock`)
    Poetry,
}

impl LockKind {
    /// Returns the lock filename for this dialect
    pub fn lock_filename(&self) -> &'static str {
        match self {
            LockKind::Uv => "uv.lock",
            LockKind::Poetry => "poetry.lock",
        }
    }

    /// Returns the display name for this dialect
    pub fn display_name(&self) -> &'static str {
        match self {
            LockKind::Uv => "uv",
            LockKind::Poetry => "Poetry",
        }
    }

    /// Returns all supported dialects in lookup priority order
    pub fn all() -> &'static [LockKind] {
        &[LockKind::Uv, LockKind::Poetry]
    }

    /// Selects the dialect from an exact lock file name
    pub fn from_filename(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.lock_filename() == name)
    }

    /// Selects the dialect from a lock file path.
    ///
    /// Anything other than `uv.lock` or `poetry.lock` is rejected.
    pub fn from_path(path: &Path) -> Result<Self, LockError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::from_filename(&name).ok_or_else(|| LockError::unsupported(name))
    }
}

impl fmt::Display for LockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_lock_filenames() {
        assert_eq!(LockKind::Uv.lock_filename(), "uv.lock");
        assert_eq!(LockKind::Poetry.lock_filename(), "poetry.lock");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            LockKind::from_path(&PathBuf::from("/project/uv.lock")).unwrap(),
            LockKind::Uv
        );
        assert_eq!(
            LockKind::from_path(&PathBuf::from("poetry.lock")).unwrap(),
            LockKind::Poetry
        );
    }

    #[test]
    fn test_from_path_rejects_unknown_name() {
        let err = LockKind::from_path(&PathBuf::from("/project/invalid.lock")).unwrap_err();
        assert!(err.to_string().contains("Unsupported lock file"));
        assert!(err.to_string().contains("invalid.lock"));
    }

    #[test]
    fn test_from_filename_is_exact() {
        assert!(LockKind::from_filename("UV.lock").is_none());
        assert!(LockKind::from_filename("pdm.lock").is_none());
    }

    #[test]
    fn test_serde_serialization() {
        assert_eq!(serde_json::to_string(&LockKind::Uv).unwrap(), "\"uv\"");
        assert_eq!(serde_json::to_string(&LockKind::Poetry).unwrap(), "\"poetry\"");
    }
}
