//! Format-preserving version rewriting for pyproject.toml
//!
//! The manifest is treated as a sequence of lines, never re-serialized:
//! - Header lines switch the current table; only dependency tables are eligible
//! - In `[project]` only `dependencies` and dotted `optional-dependencies.<group>`
//!   arrays are eligible
//! - Lines inside multi-line strings are never read as headers or declarations
//! - Each declaration is rewritten with its own operator and base version
//! - Everything outside the replaced base version is kept byte-for-byte

use crate::domain::{
    normalize_name, ResolvedVersions, SourceSection, VersionChange, VersionMapping,
};
use crate::manifest::section::DependencySection;
use crate::parser::{parse_requirement, parse_version_spec};
use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

// `key = [` opening a requirement array
static ARRAY_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:"([^"]*)"|'([^']*)'|([A-Za-z0-9_.-]+))\s*=\s*\["#).unwrap()
});

const BASIC_MULTILINE: &str = "\"\"\"";
const LITERAL_MULTILINE: &str = "'''";

// `name = ` in a Poetry dependency table
static POETRY_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:"([^"]+)"|'([^']+)'|([A-Za-z0-9_.-]+))\s*=\s*"#).unwrap()
});

// `version = ` inside an expanded per-package table
static PACKAGE_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*version\s*=\s*").unwrap());

// `version = "..."` inside an inline table value
static INLINE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[{,\s])version\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Result of rewriting a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten manifest text
    pub content: String,
    /// Every rewritten constraint, in file order
    pub changes: Vec<VersionChange>,
}

impl Rewrite {
    /// Returns true if no constraint was rewritten
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Rewrites declared versions to the versions resolved by the lock file
///
/// A declaration is rewritten when its package appears in both mappings and
/// its base version differs from the lock. Anything else is left untouched.
pub fn replace_pyproject_versions(
    lock_versions: &ResolvedVersions,
    manifest_versions: &VersionMapping,
    content: &str,
) -> String {
    rewrite_manifest(lock_versions, manifest_versions, content).content
}

/// Same as [`replace_pyproject_versions`] but also reports each change
pub fn rewrite_manifest(
    lock_versions: &ResolvedVersions,
    manifest_versions: &VersionMapping,
    content: &str,
) -> Rewrite {
    let mut rewriter = LineRewriter::new(lock_versions, manifest_versions);
    let mut output = String::with_capacity(content.len());

    for (idx, line) in content.split_inclusive('\n').enumerate() {
        let body = line.trim_end_matches(['\n', '\r']);
        let ending = &line[body.len()..];
        output.push_str(&rewriter.process_line(idx + 1, body));
        output.push_str(ending);
    }

    Rewrite {
        content: output,
        changes: rewriter.changes,
    }
}

/// A pending replacement of one constraint on the current line
struct Edit {
    range: Range<usize>,
    replacement: String,
    package: String,
    section: SourceSection,
    old_constraint: String,
    new_constraint: String,
}

/// A requirement array that continues on the next line
struct OpenArray {
    source: SourceSection,
    depth: usize,
}

struct LineRewriter<'a> {
    lock: &'a ResolvedVersions,
    manifest: &'a VersionMapping,
    section: Option<DependencySection>,
    array: Option<OpenArray>,
    /// Delimiter of a multi-line string still open at the end of the last line
    multiline: Option<&'static str>,
    changes: Vec<VersionChange>,
}

impl<'a> LineRewriter<'a> {
    fn new(lock: &'a ResolvedVersions, manifest: &'a VersionMapping) -> Self {
        Self {
            lock,
            manifest,
            section: None,
            array: None,
            multiline: None,
            changes: Vec::new(),
        }
    }

    fn process_line(&mut self, line_number: usize, body: &str) -> String {
        let edits = self.line_edits(body);
        if edits.is_empty() {
            return body.to_string();
        }

        let new_body = apply_edits(body, &edits);
        for edit in edits {
            log::info!(
                "{}: {} -> {} ({}, line {})",
                edit.package,
                edit.old_constraint,
                edit.new_constraint,
                edit.section,
                line_number
            );
            self.changes.push(VersionChange {
                package: edit.package,
                section: edit.section,
                line_number,
                old_constraint: edit.old_constraint,
                new_constraint: edit.new_constraint,
                old_line: body.to_string(),
                new_line: new_body.clone(),
            });
        }
        new_body
    }

    fn line_edits(&mut self, body: &str) -> Vec<Edit> {
        let resumed = self.multiline.is_some();
        let start = match self.multiline {
            Some(delimiter) => match multiline_end(body, 0, delimiter) {
                Some(end) => end,
                None => return Vec::new(),
            },
            None => 0,
        };
        self.multiline = unclosed_multiline(body, start);

        if resumed {
            return match self.array.take() {
                Some(array) => self.array_edits(body, start, array),
                None => Vec::new(),
            };
        }

        if let Some(array) = self.array.take() {
            return self.array_edits(body, 0, array);
        }

        if body.trim_start().starts_with('[') {
            self.section = DependencySection::from_header(body);
            return Vec::new();
        }

        let Some(section) = self.section.clone() else {
            return Vec::new();
        };

        match &section {
            DependencySection::Project
            | DependencySection::OptionalDependencies
            | DependencySection::DependencyGroups => {
                let Some(caps) = ARRAY_START_RE.captures(body) else {
                    return Vec::new();
                };
                let Some(source) = array_source(&section, &caps) else {
                    return Vec::new();
                };
                let start = caps.get(0).map_or(0, |m| m.end());
                self.array_edits(body, start, OpenArray { source, depth: 1 })
            }
            DependencySection::PoetryDependencies { .. } => self.poetry_entry_edits(body),
            DependencySection::PoetryPackageTable { package, .. } => {
                self.package_table_edits(body, package)
            }
        }
    }

    /// Scans requirement strings of an array from `start`, tracking bracket depth
    fn array_edits(&mut self, body: &str, start: usize, mut array: OpenArray) -> Vec<Edit> {
        let mut edits = Vec::new();
        let bytes = body.as_bytes();
        let mut i = start;

        while i < bytes.len() {
            match bytes[i] {
                b'#' => break,
                b'[' => array.depth += 1,
                b']' => {
                    array.depth = array.depth.saturating_sub(1);
                    if array.depth == 0 {
                        break;
                    }
                }
                b'"' | b'\'' => {
                    let Some(range) = string_literal_at(body, i) else {
                        break;
                    };
                    if let Some(edit) = self.requirement_edit(body, range.clone(), &array.source) {
                        edits.push(edit);
                    }
                    i = range.end;
                }
                _ => {}
            }
            i += 1;
        }

        if array.depth > 0 {
            self.array = Some(array);
        }
        edits
    }

    fn requirement_edit(
        &self,
        body: &str,
        range: Range<usize>,
        section: &SourceSection,
    ) -> Option<Edit> {
        let req = parse_requirement(&body[range.clone()])?;
        let locked = self.locked_version(&req.name)?;
        if !req.spec.is_rewritable() {
            log::debug!("leaving {} constraint {} as is", req.name, req.spec.raw);
            return None;
        }
        if req.spec.version == locked {
            return None;
        }

        Some(Edit {
            range,
            replacement: req.format_updated(locked),
            new_constraint: req.spec.format_updated(locked),
            old_constraint: req.spec.raw.clone(),
            package: req.name,
            section: section.clone(),
        })
    }

    /// Handles `name = "^1.0"`, `name = { version = "^1.0", ... }` and `name.version = "^1.0"`
    fn poetry_entry_edits(&self, body: &str) -> Vec<Edit> {
        let Some(section) = &self.section else {
            return Vec::new();
        };
        let Some(caps) = POETRY_ENTRY_RE.captures(body) else {
            return Vec::new();
        };
        let Some(key) = captured_key(&caps) else {
            return Vec::new();
        };
        let value_start = caps.get(0).map_or(0, |m| m.end());
        let source = section.source_section("");

        // Bare dotted keys: only `name.version` carries a constraint
        let is_bare_key = caps.get(3).is_some();
        let (package, dotted_version) = match key.split_once('.') {
            Some((package, "version")) if is_bare_key => (package, true),
            Some(_) if is_bare_key => return Vec::new(),
            _ => (key, false),
        };
        if package == "python" {
            return Vec::new();
        }

        let value = &body[value_start..];
        let ranges: Vec<Range<usize>> = if value.starts_with(['"', '\'']) {
            string_literal_at(body, value_start).into_iter().collect()
        } else if !dotted_version && value.starts_with(['{', '[']) {
            inline_version_ranges(value)
                .into_iter()
                .map(|r| r.start + value_start..r.end + value_start)
                .collect()
        } else {
            Vec::new()
        };

        ranges
            .into_iter()
            .filter_map(|range| self.constraint_edit(body, range, package, &source))
            .collect()
    }

    /// Handles `version = "^1.0"` inside `[tool.poetry.dependencies.<package>]`
    fn package_table_edits(&self, body: &str, package: &str) -> Vec<Edit> {
        let Some(section) = &self.section else {
            return Vec::new();
        };
        let Some(found) = PACKAGE_VERSION_RE.find(body) else {
            return Vec::new();
        };
        let source = section.source_section("");

        string_literal_at(body, found.end())
            .and_then(|range| self.constraint_edit(body, range, package, &source))
            .into_iter()
            .collect()
    }

    fn constraint_edit(
        &self,
        body: &str,
        range: Range<usize>,
        package: &str,
        section: &SourceSection,
    ) -> Option<Edit> {
        let locked = self.locked_version(package)?;
        let spec = parse_version_spec(&body[range.clone()])?;
        if !spec.is_rewritable() {
            log::debug!("leaving {} constraint {} as is", package, spec.raw);
            return None;
        }
        if spec.version == locked {
            return None;
        }

        let new_constraint = spec.format_updated(locked);
        Some(Edit {
            range,
            replacement: new_constraint.clone(),
            package: package.to_string(),
            section: section.clone(),
            old_constraint: spec.raw,
            new_constraint,
        })
    }

    /// Returns the lock version for a package declared in the manifest
    fn locked_version(&self, package: &str) -> Option<&'a str> {
        let key = normalize_name(package);
        if !self.manifest.contains_key(&key) {
            return None;
        }
        self.lock.get(&key).map(String::as_str)
    }
}

/// Maps the key of an array opening line to the section its requirements belong to
///
/// Bare dotted keys are only meaningful under `[project]`, where
/// `optional-dependencies.<group>` declares an extra in place.
fn array_source(section: &DependencySection, caps: &Captures<'_>) -> Option<SourceSection> {
    let key = captured_key(caps)?;
    let dotted = caps.get(3).and_then(|_| key.split_once('.'));

    match (section, dotted) {
        (DependencySection::Project, None) if key == "dependencies" => {
            Some(SourceSection::ProjectDependencies)
        }
        (DependencySection::Project, Some(("optional-dependencies", group)))
            if !group.contains('.') =>
        {
            Some(SourceSection::OptionalDependencies {
                group: group.to_string(),
            })
        }
        (DependencySection::Project, _) | (_, Some(_)) => None,
        (section, None) => Some(section.source_section(key)),
    }
}

fn captured_key<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Returns the content range of the single-line string literal opening at `start`
///
/// Basic strings honor backslash escapes; literal strings have none.
/// Multi-line delimiters are not single-line literals and yield `None`.
fn string_literal_at(body: &str, start: usize) -> Option<Range<usize>> {
    let bytes = body.as_bytes();
    let quote = *bytes.get(start)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let rest = &body[start..];
    if rest.starts_with(BASIC_MULTILINE) || rest.starts_with(LITERAL_MULTILINE) {
        return None;
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if quote == b'"' => i += 1,
            c if c == quote => return Some(start + 1..i),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Returns the delimiter of a multi-line string left open by `body[start..]`
fn unclosed_multiline(body: &str, start: usize) -> Option<&'static str> {
    let bytes = body.as_bytes();
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'#' => return None,
            b'"' | b'\'' => {
                let rest = &body[i..];
                let delimiter = [BASIC_MULTILINE, LITERAL_MULTILINE]
                    .into_iter()
                    .find(|d| rest.starts_with(*d));
                i = match delimiter {
                    Some(delimiter) => match multiline_end(body, i + delimiter.len(), delimiter) {
                        Some(end) => end,
                        None => return Some(delimiter),
                    },
                    None => string_literal_at(body, i)?.end + 1,
                };
            }
            _ => i += 1,
        }
    }
    None
}

/// Returns the offset just past the closing `delimiter` at or after `start`
///
/// Up to two quotes directly before the delimiter belong to the content.
fn multiline_end(body: &str, start: usize, delimiter: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let quote = delimiter.as_bytes()[0];
    let mut i = start;

    while i < bytes.len() {
        if bytes[i] == b'\\' && quote == b'"' {
            i += 2;
            continue;
        }
        if bytes[i..].starts_with(delimiter.as_bytes()) {
            let mut end = i + delimiter.len();
            while end < bytes.len() && end < i + delimiter.len() + 2 && bytes[end] == quote {
                end += 1;
            }
            return Some(end);
        }
        i += 1;
    }
    None
}

fn inline_version_ranges(value: &str) -> Vec<Range<usize>> {
    INLINE_VERSION_RE
        .captures_iter(value)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.range())
        .collect()
}

fn apply_edits(body: &str, edits: &[Edit]) -> String {
    let mut result = String::with_capacity(body.len());
    let mut cursor = 0;
    for edit in edits {
        result.push_str(&body[cursor..edit.range.start]);
        result.push_str(&edit.replacement);
        cursor = edit.range.end;
    }
    result.push_str(&body[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(&str, &str)]) -> ResolvedVersions {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn rewrite(lock: &[(&str, &str)], content: &str) -> Rewrite {
        let manifest = crate::manifest::collect_pyproject_versions(content).unwrap();
        rewrite_manifest(&mapping(lock), &manifest, content)
    }

    #[test]
    fn test_poetry_caret_rewrite() {
        let content = "[tool.poetry.dependencies]\nrequests = \"^2.28.0\"\n";
        let result = rewrite(&[("requests", "2.31.0")], content);

        assert_eq!(
            result.content,
            "[tool.poetry.dependencies]\nrequests = \"^2.31.0\"\n"
        );
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].old_constraint, "^2.28.0");
        assert_eq!(result.changes[0].new_constraint, "^2.31.0");
        assert_eq!(result.changes[0].line_number, 2);
        assert_eq!(result.changes[0].section, SourceSection::PoetryMain);
    }

    #[test]
    fn test_pep621_multiline_array() {
        let content = r#"[project]
name = "demo"
version = "8.0.0"
requires-python = ">=3.9"
dependencies = [
    "click>=8.0.0",  # cli
    "rich>=13.0",
]
"#;
        let result = rewrite(&[("click", "8.2.0"), ("rich", "13.7.1")], content);

        assert!(result.content.contains("\"click>=8.2.0\",  # cli"));
        assert!(result.content.contains("\"rich>=13.7.1\","));
        assert!(result.content.contains("version = \"8.0.0\""));
        assert!(result.content.contains("requires-python = \">=3.9\""));
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn test_single_line_array() {
        let content = "[project]\ndependencies = [\"click>=8.0.0\", 'httpx~=0.27']\n";
        let result = rewrite(&[("click", "8.2.0"), ("httpx", "0.28.1")], content);

        assert_eq!(
            result.content,
            "[project]\ndependencies = [\"click>=8.2.0\", 'httpx~=0.28.1']\n"
        );
    }

    #[test]
    fn test_extras_and_markers_preserved() {
        let content = r#"[project.optional-dependencies]
docs = [
    "mkdocstrings[python]>=0.26.1; python_version >= '3.9'",
]
"#;
        let result = rewrite(&[("mkdocstrings", "0.27.0")], content);

        assert!(result
            .content
            .contains("\"mkdocstrings[python]>=0.27.0; python_version >= '3.9'\","));
        assert_eq!(
            result.changes[0].section,
            SourceSection::OptionalDependencies {
                group: "docs".to_string()
            }
        );
    }

    #[test]
    fn test_range_keeps_upper_bound() {
        let content = "[dependency-groups]\ntest = [\"pytest>=7.0,<9\"]\n";
        let result = rewrite(&[("pytest", "8.3.4")], content);

        assert_eq!(
            result.content,
            "[dependency-groups]\ntest = [\"pytest>=8.3.4,<9\"]\n"
        );
    }

    #[test]
    fn test_poetry_inline_table() {
        let content = r#"[tool.poetry.group.dev.dependencies]
black = { version = "^24.1.0", optional = true }
"#;
        let result = rewrite(&[("black", "24.10.0")], content);

        assert!(result
            .content
            .contains("black = { version = \"^24.10.0\", optional = true }"));
        assert_eq!(
            result.changes[0].section,
            SourceSection::PoetryGroup {
                group: "dev".to_string()
            }
        );
    }

    #[test]
    fn test_poetry_package_table() {
        let content = r#"[tool.poetry.dependencies.requests]
version = "~2.28"
extras = ["socks"]
"#;
        let result = rewrite(&[("requests", "2.32.3")], content);

        assert!(result.content.contains("version = \"~2.32.3\""));
        assert!(result.content.contains("extras = [\"socks\"]"));
    }

    #[test]
    fn test_poetry_dotted_version_key() {
        let content = "[tool.poetry.dependencies]\nrequests.version = \"^2.28.0\"\n";
        let result = rewrite(&[("requests", "2.31.0")], content);

        assert_eq!(
            result.content,
            "[tool.poetry.dependencies]\nrequests.version = \"^2.31.0\"\n"
        );
    }

    #[test]
    fn test_per_line_operators_for_repeated_package() {
        let content = r#"[tool.poetry.dependencies]
attrs = "^23.1.0"

[tool.poetry.group.test.dependencies]
attrs = ">=22.2.0"
"#;
        let result = rewrite(&[("attrs", "24.2.0")], content);

        assert!(result.content.contains("attrs = \"^24.2.0\""));
        assert!(result.content.contains("attrs = \">=24.2.0\""));
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn test_unrelated_sections_untouched() {
        let content = r#"[project]
dependencies = ["click>=8.0.0"]

[project.urls]
changelog = "https://example.com/click>=8.0.0"

[tool.ruff]
target-version = "py39"

# click = "^8.0.0"
"#;
        let result = rewrite(&[("click", "8.2.0")], content);

        assert!(result.content.contains("[\"click>=8.2.0\"]"));
        assert!(result
            .content
            .contains("changelog = \"https://example.com/click>=8.0.0\""));
        assert!(result.content.contains("# click = \"^8.0.0\""));
        assert_eq!(result.changes.len(), 1);
    }

    #[test]
    fn test_commented_out_requirement_untouched() {
        let content = r#"[project]
dependencies = [
    # "click>=8.0.0",
    "rich>=13.0",
]
"#;
        let result = rewrite(&[("click", "8.2.0"), ("rich", "13.7.1")], content);

        assert!(result.content.contains("# \"click>=8.0.0\","));
        assert!(result.content.contains("\"rich>=13.7.1\""));
    }

    #[test]
    fn test_package_missing_from_lock_unchanged() {
        let content = "[project]\ndependencies = [\"click>=8.0.0\", \"rich>=13.0\"]\n";
        let result = rewrite(&[("click", "8.2.0")], content);

        assert!(result.content.contains("\"rich>=13.0\""));
        assert_eq!(result.changes.len(), 1);
    }

    #[test]
    fn test_python_and_exclusions_never_rewritten() {
        let content = r#"[tool.poetry.dependencies]
python = "^3.9"
urllib3 = "!=2.0.0"
anything = "*"
"#;
        let result = rewrite(
            &[("python", "3.12.0"), ("urllib3", "2.2.3"), ("anything", "1.0.0")],
            content,
        );

        assert_eq!(result.content, content);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_exclusive_bounds_untouched() {
        let content = "[project]\ndependencies = [\"a>1.0\", \"b<3.0\", \"c<=3.0\"]\n";
        let result = rewrite(&[("a", "2.0"), ("b", "2.0"), ("c", "2.0")], content);

        assert_eq!(
            result.content,
            "[project]\ndependencies = [\"a>1.0\", \"b<3.0\", \"c<=2.0\"]\n"
        );
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].package, "c");
    }

    #[test]
    fn test_poetry_alternatives_untouched() {
        let content = "[tool.poetry.dependencies]\nfoo = \"^1.0 || ^2.0\"\n";
        let result = rewrite(&[("foo", "2.5.0")], content);

        assert_eq!(result.content, content);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_multiline_string_not_read_as_table() {
        let content = r#"[tool.notes]
text = """
[tool.poetry.dependencies]
requests = "^1.0.0"
"""

[tool.poetry.dependencies]
requests = "^2.28.0"
"#;
        let result = rewrite(&[("requests", "2.31.0")], content);

        assert!(result.content.contains("requests = \"^1.0.0\"\n\"\"\""));
        assert!(result.content.ends_with("requests = \"^2.31.0\"\n"));
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].line_number, 8);
    }

    #[test]
    fn test_multiline_string_keeps_current_table() {
        let content = r#"[project]
description = '''
[tool.poetry.dependencies]
'''
dependencies = ["rich>=13.0"]
"#;
        let result = rewrite(&[("rich", "13.7.1")], content);

        assert!(result.content.contains("dependencies = [\"rich>=13.7.1\"]"));
        assert_eq!(result.changes[0].section, SourceSection::ProjectDependencies);
    }

    #[test]
    fn test_project_dotted_optional_dependencies() {
        let content = r#"[project]
name = "demo"
optional-dependencies.docs = [
    "mkdocs>=1.0",
]
dependencies = ["click>=8.0.0"]
"#;
        let result = rewrite(&[("mkdocs", "1.6.0"), ("click", "8.2.0")], content);

        assert!(result.content.contains("\"mkdocs>=1.6.0\","));
        assert!(result.content.contains("[\"click>=8.2.0\"]"));
        assert_eq!(
            result.changes[0].section,
            SourceSection::OptionalDependencies {
                group: "docs".to_string()
            }
        );
        assert_eq!(result.changes[1].section, SourceSection::ProjectDependencies);
    }

    #[test]
    fn test_already_synced_is_byte_identical() {
        let content = "[project]\r\ndependencies = [\r\n  \"click>=8.2.0\" ,\r\n]\r\n\r\n[tool.poetry.dependencies]\r\nrequests = '^2.31.0'";
        let result = rewrite(&[("click", "8.2.0"), ("requests", "2.31.0")], content);

        assert_eq!(result.content, content);
        assert!(result.is_unchanged());
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let content = "[tool.poetry.dependencies]\nPyYAML = \"^6.0\"\n";
        let result = rewrite(&[("pyyaml", "6.0.2")], content);

        assert_eq!(result.content, "[tool.poetry.dependencies]\nPyYAML = \"^6.0.2\"\n");
        assert_eq!(result.changes[0].package, "PyYAML");
    }

    #[test]
    fn test_replace_needs_manifest_membership() {
        let content = "[tool.poetry.dependencies]\nrequests = \"^2.28.0\"\n";
        let result = replace_pyproject_versions(
            &mapping(&[("requests", "2.31.0")]),
            &VersionMapping::new(),
            content,
        );
        assert_eq!(result, content);
    }

    #[test]
    fn test_string_literal_at() {
        assert_eq!(string_literal_at(r#"x = "a\"b""#, 4), Some(5..9));
        assert_eq!(string_literal_at("x = 'a\\'", 4), Some(5..7));
        assert_eq!(string_literal_at("x = \"open", 4), None);
        assert_eq!(string_literal_at("x = 1", 4), None);
        assert_eq!(string_literal_at(r#"x = """a""""#, 4), None);
    }

    #[test]
    fn test_unclosed_multiline() {
        assert_eq!(unclosed_multiline(r#"text = """"#, 0), Some(BASIC_MULTILINE));
        assert_eq!(unclosed_multiline("text = '''", 0), Some(LITERAL_MULTILINE));
        assert_eq!(unclosed_multiline(r#"text = """done""""#, 0), None);
        assert_eq!(unclosed_multiline(r#"text = '''a''' # """"#, 0), None);
        assert_eq!(unclosed_multiline(r#"x = "\"\"\"""#, 0), None);
    }

    #[test]
    fn test_multiline_end() {
        assert_eq!(multiline_end(r#"ab""""""#, 0, BASIC_MULTILINE), Some(7));
        assert_eq!(multiline_end(r#"a\"""b""""#, 0, BASIC_MULTILINE), Some(9));
        assert_eq!(multiline_end(r"a\'''", 0, LITERAL_MULTILINE), Some(5));
        assert_eq!(multiline_end("still open", 0, BASIC_MULTILINE), None);
    }
}
