//! Dependency declaration structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// The manifest construct a dependency was declared in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SourceSection {
    /// `[project].dependencies`
    ProjectDependencies,
    /// `[project.optional-dependencies].<group>`
    OptionalDependencies { group: String },
    /// `[dependency-groups].<group>`
    DependencyGroup { group: String },
    /// `[tool.poetry.dependencies]`
    PoetryMain,
    /// `[tool.poetry.group.<group>.dependencies]` (or legacy `dev-dependencies`)
    PoetryGroup { group: String },
}

impl SourceSection {
    /// Returns true for the PEP 621 / uv family of sections
    pub fn is_pep621(&self) -> bool {
        matches!(
            self,
            SourceSection::ProjectDependencies
                | SourceSection::OptionalDependencies { .. }
                | SourceSection::DependencyGroup { .. }
        )
    }

    /// Returns true for Poetry tables
    pub fn is_poetry(&self) -> bool {
        !self.is_pep621()
    }
}

impl fmt::Display for SourceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSection::ProjectDependencies => write!(f, "project.dependencies"),
            SourceSection::OptionalDependencies { group } => {
                write!(f, "project.optional-dependencies.{}", group)
            }
            SourceSection::DependencyGroup { group } => write!(f, "dependency-groups.{}", group),
            SourceSection::PoetryMain => write!(f, "tool.poetry.dependencies"),
            SourceSection::PoetryGroup { group } => {
                write!(f, "tool.poetry.group.{}.dependencies", group)
            }
        }
    }
}

/// A single declared dependency occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    /// Package name as written in the manifest
    pub package_name: String,
    /// Raw version constraint (e.g. `>=2.0.0,<3.0.0`)
    pub version_constraint: String,
    /// Where the declaration lives
    pub source_section: SourceSection,
    /// Bracketed extras, preserved verbatim on rewrite
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
}

impl DependencySpec {
    /// Creates a new dependency declaration
    pub fn new(
        package_name: impl Into<String>,
        version_constraint: impl Into<String>,
        source_section: SourceSection,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            version_constraint: version_constraint.into(),
            source_section,
            extras: Vec::new(),
        }
    }

    /// Sets the extras for this dependency (builder pattern)
    pub fn with_extras(mut self, extras: Vec<String>) -> Self {
        self.extras = extras;
        self
    }

    /// Returns the normalized lookup key for this package
    pub fn key(&self) -> String {
        normalize_name(&self.package_name)
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extras.is_empty() {
            write!(
                f,
                "{}{} [{}]",
                self.package_name, self.version_constraint, self.source_section
            )
        } else {
            write!(
                f,
                "{}[{}]{} [{}]",
                self.package_name,
                self.extras.join(","),
                self.version_constraint,
                self.source_section
            )
        }
    }
}

/// Normalizes a package name for lookups (PEP 503).
///
/// Lowercases and collapses every run of `-`, `_` and `.` into a single `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.trim().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
                in_separator = true;
            }
        } else {
            normalized.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("requests"), "requests");
        assert_eq!(normalize_name("Django"), "django");
        assert_eq!(normalize_name("zope.interface"), "zope-interface");
        assert_eq!(normalize_name("typing_extensions"), "typing-extensions");
        assert_eq!(normalize_name("Foo__Bar--baz"), "foo-bar-baz");
    }

    #[test]
    fn test_dependency_key() {
        let dep = DependencySpec::new("PyYAML", ">=6.0", SourceSection::ProjectDependencies);
        assert_eq!(dep.key(), "pyyaml");
    }

    #[test]
    fn test_source_section_family() {
        assert!(SourceSection::ProjectDependencies.is_pep621());
        assert!(SourceSection::DependencyGroup {
            group: "test".to_string()
        }
        .is_pep621());
        assert!(SourceSection::PoetryMain.is_poetry());
        assert!(SourceSection::PoetryGroup {
            group: "dev".to_string()
        }
        .is_poetry());
    }

    #[test]
    fn test_display_with_extras() {
        let dep = DependencySpec::new(
            "mkdocstrings",
            ">=0.26.1",
            SourceSection::OptionalDependencies {
                group: "docs".to_string(),
            },
        )
        .with_extras(vec!["python".to_string()]);
        assert_eq!(
            dep.to_string(),
            "mkdocstrings[python]>=0.26.1 [project.optional-dependencies.docs]"
        );
    }
}
