//! Table header classification for pyproject.toml
//!
//! Only a handful of tables carry dependency declarations. The rewriter
//! consults this module on every header line so that version-looking
//! strings elsewhere (`[project.urls]`, `[tool.ruff]`, comments) are never
//! touched.

use crate::domain::SourceSection;

/// A parsed `[table]` or `[[array.of.tables]]` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    /// Dotted key segments, unquoted
    pub keys: Vec<String>,
    /// True for `[[...]]` headers
    pub is_array: bool,
}

/// A dependency-bearing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencySection {
    /// `[project]`; only its `dependencies` array is eligible
    Project,
    /// `[project.optional-dependencies]` and its subsections
    OptionalDependencies,
    /// `[dependency-groups]`
    DependencyGroups,
    /// `[tool.poetry.dependencies]`, `[tool.poetry.group.<g>.dependencies]`
    /// or the legacy `[tool.poetry.dev-dependencies]`
    PoetryDependencies { group: Option<String> },
    /// Expanded per-package table such as `[tool.poetry.dependencies.requests]`
    PoetryPackageTable {
        group: Option<String>,
        package: String,
    },
}

impl DependencySection {
    /// Classifies a header line; `None` for unrelated tables
    pub fn from_header(line: &str) -> Option<Self> {
        let header = parse_header(line)?;
        if header.is_array {
            return None;
        }
        classify(&header.keys)
    }

    /// Returns the source section for a declaration in this table
    ///
    /// `group` is the array key for optional-dependencies and
    /// dependency-groups tables and is ignored elsewhere.
    pub fn source_section(&self, group: &str) -> SourceSection {
        match self {
            DependencySection::Project => SourceSection::ProjectDependencies,
            DependencySection::OptionalDependencies => SourceSection::OptionalDependencies {
                group: group.to_string(),
            },
            DependencySection::DependencyGroups => SourceSection::DependencyGroup {
                group: group.to_string(),
            },
            DependencySection::PoetryDependencies { group }
            | DependencySection::PoetryPackageTable { group, .. } => match group {
                Some(group) => SourceSection::PoetryGroup {
                    group: group.clone(),
                },
                None => SourceSection::PoetryMain,
            },
        }
    }

    /// Returns true for tables holding PEP 621 requirement arrays
    pub fn holds_requirement_arrays(&self) -> bool {
        matches!(
            self,
            DependencySection::Project
                | DependencySection::OptionalDependencies
                | DependencySection::DependencyGroups
        )
    }
}

fn classify(keys: &[String]) -> Option<DependencySection> {
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    match keys.as_slice() {
        ["project"] => Some(DependencySection::Project),
        ["project", "optional-dependencies", ..] => Some(DependencySection::OptionalDependencies),
        ["dependency-groups", ..] => Some(DependencySection::DependencyGroups),
        ["tool", "poetry", "dependencies"] => {
            Some(DependencySection::PoetryDependencies { group: None })
        }
        ["tool", "poetry", "dependencies", package] => Some(DependencySection::PoetryPackageTable {
            group: None,
            package: package.to_string(),
        }),
        ["tool", "poetry", "dev-dependencies"] => Some(DependencySection::PoetryDependencies {
            group: Some("dev".to_string()),
        }),
        ["tool", "poetry", "dev-dependencies", package] => {
            Some(DependencySection::PoetryPackageTable {
                group: Some("dev".to_string()),
                package: package.to_string(),
            })
        }
        ["tool", "poetry", "group", group, "dependencies"] => {
            Some(DependencySection::PoetryDependencies {
                group: Some(group.to_string()),
            })
        }
        ["tool", "poetry", "group", group, "dependencies", package] => {
            Some(DependencySection::PoetryPackageTable {
                group: Some(group.to_string()),
                package: package.to_string(),
            })
        }
        _ => None,
    }
}

/// Returns true if the header names a dependency-bearing table
///
/// ```
/// use depsync::manifest::is_dependency_section;
///
/// assert!(is_dependency_section("[tool.poetry.group.dev.dependencies]"));
/// assert!(!is_dependency_section("[project.urls]"));
/// ```
pub fn is_dependency_section(header: &str) -> bool {
    DependencySection::from_header(header).is_some()
}

/// Parses a header line such as `[tool.poetry."my group".dependencies]  # note`
pub fn parse_header(line: &str) -> Option<TableHeader> {
    let trimmed = line.trim();
    let (is_array, inner_start) = if trimmed.starts_with("[[") {
        (true, 2)
    } else if trimmed.starts_with('[') {
        (false, 1)
    } else {
        return None;
    };

    let inner = &trimmed[inner_start..];
    let close = find_unquoted(inner, ']')?;
    let keys = split_dotted_key(&inner[..close])?;
    Some(TableHeader { keys, is_array })
}

/// Splits a dotted key into unquoted segments
///
/// Returns `None` for empty segments or unterminated quotes.
pub fn split_dotted_key(key: &str) -> Option<Vec<String>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in key.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '"' | '\'' => quote = Some(c),
                '.' => {
                    let segment = current.trim().to_string();
                    if segment.is_empty() {
                        return None;
                    }
                    segments.push(segment);
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }

    if quote.is_some() {
        return None;
    }
    let segment = current.trim().to_string();
    if segment.is_empty() {
        return None;
    }
    segments.push(segment);
    Some(segments)
}

/// Finds `target` outside of quoted key segments
fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == target => return Some(i),
            None => {}
        }
    }
    None
}
