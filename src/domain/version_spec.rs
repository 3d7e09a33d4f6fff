//! Version constraint types for pyproject.toml declarations
//!
//! Handles constraints like:
//! - PEP 440: `>=1.2.3`, `==1.2.3`, `~=1.2`, `>=1.0,<2.0`
//! - Poetry: `^1.2.3`, `~1.2.3`, bare `1.2.3`

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator class of a version constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSpecKind {
    /// Exact version (`==1.2.3`, `===1.2.3`, `=1.2.3`)
    Exact,
    /// Bare version without operator (`1.2.3`), exact in Poetry
    Bare,
    /// Caret range (`^1.2.3`, Poetry)
    Caret,
    /// Tilde range (`~1.2.3`, Poetry)
    Tilde,
    /// Compatible release (`~=1.2`, PEP 440)
    Compatible,
    /// Greater than or equal (`>=1.2.3`)
    GreaterOrEqual,
    /// Greater than (`>1.2.3`)
    Greater,
    /// Less than or equal (`<=1.2.3`)
    LessOrEqual,
    /// Less than (`<1.2.3`)
    Less,
    /// Exclusion (`!=1.2.3`)
    NotEqual,
}

impl VersionSpecKind {
    /// Maps an operator token to its kind
    pub fn from_operator(op: &str) -> Self {
        match op {
            "==" | "===" | "=" => VersionSpecKind::Exact,
            "^" => VersionSpecKind::Caret,
            "~" => VersionSpecKind::Tilde,
            "~=" => VersionSpecKind::Compatible,
            ">=" => VersionSpecKind::GreaterOrEqual,
            ">" => VersionSpecKind::Greater,
            "<=" => VersionSpecKind::LessOrEqual,
            "<" => VersionSpecKind::Less,
            "!=" => VersionSpecKind::NotEqual,
            _ => VersionSpecKind::Bare,
        }
    }

    /// Returns true if a lock version may be written into this constraint.
    ///
    /// Exclusions and exclusive bounds would forbid the resolved version
    /// itself once it is copied into them.
    pub fn accepts_lock_version(&self) -> bool {
        !matches!(
            self,
            VersionSpecKind::NotEqual | VersionSpecKind::Greater | VersionSpecKind::Less
        )
    }
}

/// A version constraint with its original string representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    /// The operator class of the first (lower-bound) component
    pub kind: VersionSpecKind,
    /// The raw constraint as it appears in the manifest
    pub raw: String,
    /// The extracted base version (first component, without operator)
    pub version: String,
    /// Text before the base version (operator and spacing), kept verbatim
    pub prefix: Option<String>,
    /// Text after the base version (e.g. `,<2.0`), kept verbatim
    pub suffix: Option<String>,
}

impl VersionSpec {
    /// Creates a new VersionSpec
    pub fn new(kind: VersionSpecKind, raw: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
            version: version.into(),
            prefix: None,
            suffix: None,
        }
    }

    /// Creates a new VersionSpec with prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Creates a new VersionSpec with suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Returns true if this is a comma-joined range (`>=1.0,<2.0`)
    pub fn is_range(&self) -> bool {
        self.suffix
            .as_deref()
            .is_some_and(|s| s.trim_start().starts_with(','))
    }

    /// Returns true if the base version looks like a release number.
    ///
    /// Wildcards (`*`, `1.*`) and anything not starting with a digit are
    /// left alone by the rewriter.
    pub fn has_numeric_base(&self) -> bool {
        self.version.starts_with(|c: char| c.is_ascii_digit()) && !self.version.contains('*')
    }

    /// Returns true if the constraint lists alternatives (`^1.0 || ^2.0`)
    pub fn has_alternatives(&self) -> bool {
        self.raw.contains("||")
    }

    /// Returns true if this constraint can be rewritten to a lock version
    pub fn is_rewritable(&self) -> bool {
        self.kind.accepts_lock_version() && self.has_numeric_base() && !self.has_alternatives()
    }

    /// Formats a new base version while preserving the original format
    pub fn format_updated(&self, new_version: &str) -> String {
        let mut result = String::new();

        if let Some(ref prefix) = self.prefix {
            result.push_str(prefix);
        }

        result.push_str(new_version);

        if let Some(ref suffix) = self.suffix {
            result.push_str(suffix);
        }

        result
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
