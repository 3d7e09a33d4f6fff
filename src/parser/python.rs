//! Python (PEP 440 / Poetry) version constraint parser
//!
//! Handles constraint formats:
//! - Exact: `==1.2.3`, `===1.2.3`, `=1.2.3`
//! - Caret: `^1.2.3` (Poetry)
//! - Tilde: `~1.2.3` (Poetry) or `~=1.2.3` (compatible release)
//! - Comparison: `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3`, `!=1.2.3`
//! - Range: `>=1.0,<2.0` (the first component is the base)
//! - Bare: `1.2.3` (Poetry)
//!
//! And PEP 508 requirement strings such as `pkg[extra]>=1.0; python_version >= "3.9"`.

use crate::domain::{VersionSpec, VersionSpecKind};
use regex::Regex;
use std::sync::LazyLock;

/// Operators in match order (longest first so `===` wins over `==`)
const OPERATORS: [&str; 11] = ["===", "==", "~=", ">=", "<=", "!=", "^", "~", ">", "<", "="];

// Package name and optional extras at the start of a requirement string
static REQUIREMENT_HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*(?:\[([^\]]*)\])?\s*").unwrap()
});

/// A PEP 508 requirement split into byte-preserving parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Package name as written (extras stripped)
    pub name: String,
    /// Extras listed in brackets after the name
    pub extras: Vec<String>,
    /// Everything before the constraint: name, extras and spacing
    pub head: String,
    /// The version constraint
    pub spec: VersionSpec,
    /// Everything after the constraint: trailing spacing and marker
    pub tail: String,
}

impl Requirement {
    /// Rebuilds the requirement with a new base version
    pub fn format_updated(&self, new_version: &str) -> String {
        format!(
            "{}{}{}",
            self.head,
            self.spec.format_updated(new_version),
            self.tail
        )
    }
}

/// Splits a leading operator off a constraint component
fn split_operator(spec: &str) -> (&str, &str) {
    for op in OPERATORS {
        if let Some(rest) = spec.strip_prefix(op) {
            return (op, rest);
        }
    }
    ("", spec)
}

/// Parses a version constraint, keeping the text around the base version
///
/// Returns `None` when no base version can be found.
pub fn parse_version_spec(raw: &str) -> Option<VersionSpec> {
    let trimmed = raw.trim_start();
    let leading = raw.len() - trimmed.len();

    let (op, after_op) = split_operator(trimmed);
    let version_part = after_op.trim_start();
    let version_start = leading + op.len() + (after_op.len() - version_part.len());

    let version_len = version_part
        .find(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .unwrap_or(version_part.len());
    if version_len == 0 {
        return None;
    }
    let version_end = version_start + version_len;

    let mut spec = VersionSpec::new(
        VersionSpecKind::from_operator(op),
        raw,
        &raw[version_start..version_end],
    );
    if version_start > 0 {
        spec = spec.with_prefix(&raw[..version_start]);
    }
    if version_end < raw.len() {
        spec = spec.with_suffix(&raw[version_end..]);
    }
    Some(spec)
}

/// Extracts the base version from a constraint
///
/// `>=1.0.0` → `1.0.0`, `^2.3.4` → `2.3.4`, `>=1.0,<2.0` → `1.0`.
/// No validation is done; malformed input yields a best-effort substring.
pub fn extract_base_version(spec: &str) -> String {
    match parse_version_spec(spec) {
        Some(parsed) => parsed.version,
        None => {
            let first = spec.split(',').next().unwrap_or_default().trim();
            split_operator(first).1.trim().to_string()
        }
    }
}

/// Splits a PEP 508 requirement string into its parts
///
/// Returns `None` for bare names (`requests`, `pkg[extra]`), URL requirements
/// and anything without a comparison operator.
pub fn parse_requirement(raw: &str) -> Option<Requirement> {
    let caps = REQUIREMENT_HEAD_RE.captures(raw)?;
    let head_match = caps.get(0)?;
    let name = caps.get(1)?.as_str().to_string();
    let extras = caps
        .get(2)
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let rest = &raw[head_match.end()..];
    let marker_start = rest.find(';').unwrap_or(rest.len());
    let constraint = rest[..marker_start].trim_end();
    if constraint.is_empty() {
        return None;
    }

    let spec = parse_version_spec(constraint)?;
    if spec.kind == VersionSpecKind::Bare {
        return None;
    }

    Some(Requirement {
        name,
        extras,
        head: head_match.as_str().to_string(),
        spec,
        tail: rest[constraint.len()..].to_string(),
    })
}

/// Extracts `(name, base_version)` from a PEP 621 requirement string
///
/// Extras are stripped from the name. Returns `None` when the string carries
/// no version comparator.
pub fn parse_pep621_dependency(spec: &str) -> Option<(String, String)> {
    parse_requirement(spec).map(|req| (req.name, req.spec.version))
}
