//! Declared-version collection from pyproject.toml
//!
//! Handles:
//! - project.dependencies (PEP 621)
//! - project.optional-dependencies (PEP 621)
//! - dependency-groups (PEP 735, uv)
//! - tool.poetry.dependencies (Poetry)
//! - tool.poetry.group.*.dependencies (Poetry 1.2+)
//! - tool.poetry.dev-dependencies (Poetry, legacy)

use crate::domain::{DependencySpec, SourceSection, VersionMapping};
use crate::parser::{extract_base_version, parse_requirement};
use toml::Value;

/// A Poetry dependency value: `pkg = "^1.0"` or `pkg = { version = "^1.0", ... }`
enum PoetryValue<'a> {
    Constraint(&'a str),
    Table(&'a toml::Table),
}

impl<'a> PoetryValue<'a> {
    fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(PoetryValue::Constraint(s)),
            Value::Table(t) => Some(PoetryValue::Table(t)),
            _ => None,
        }
    }

    /// Returns the version constraint; git/path/url tables have none
    fn constraint(&self) -> Option<&'a str> {
        match *self {
            PoetryValue::Constraint(s) => Some(s),
            PoetryValue::Table(t) => t.get("version")?.as_str(),
        }
    }

    fn extras(&self) -> Vec<String> {
        match self {
            PoetryValue::Constraint(_) => Vec::new(),
            PoetryValue::Table(t) => t
                .get("extras")
                .and_then(Value::as_array)
                .map(|extras| {
                    extras
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Collects every PEP 621 / uv declaration that carries a version
pub fn uv_dependency_specs(toml: &Value) -> Vec<DependencySpec> {
    let mut specs = Vec::new();
    let project = toml.get("project");

    if let Some(deps) = project
        .and_then(|p| p.get("dependencies"))
        .and_then(Value::as_array)
    {
        push_requirements(&mut specs, deps, &SourceSection::ProjectDependencies);
    }

    if let Some(optional) = project
        .and_then(|p| p.get("optional-dependencies"))
        .and_then(Value::as_table)
    {
        for (group, deps) in optional {
            if let Some(deps) = deps.as_array() {
                let section = SourceSection::OptionalDependencies {
                    group: group.clone(),
                };
                push_requirements(&mut specs, deps, &section);
            }
        }
    }

    if let Some(groups) = toml.get("dependency-groups").and_then(Value::as_table) {
        for (group, deps) in groups {
            if let Some(deps) = deps.as_array() {
                let section = SourceSection::DependencyGroup {
                    group: group.clone(),
                };
                push_requirements(&mut specs, deps, &section);
            }
        }
    }

    specs
}

fn push_requirements(specs: &mut Vec<DependencySpec>, deps: &[Value], section: &SourceSection) {
    // Non-string entries ({include-group = "..."}) carry no version
    for dep_str in deps.iter().filter_map(Value::as_str) {
        if let Some(req) = parse_requirement(dep_str) {
            specs.push(
                DependencySpec::new(req.name, req.spec.raw, section.clone())
                    .with_extras(req.extras),
            );
        }
    }
}

/// Collects every Poetry declaration that carries a version
pub fn poetry_dependency_specs(toml: &Value) -> Vec<DependencySpec> {
    let mut specs = Vec::new();
    let Some(poetry) = toml.get("tool").and_then(|t| t.get("poetry")) else {
        return specs;
    };

    if let Some(deps) = poetry.get("dependencies").and_then(Value::as_table) {
        push_poetry_table(&mut specs, deps, &SourceSection::PoetryMain);
    }

    if let Some(deps) = poetry.get("dev-dependencies").and_then(Value::as_table) {
        let section = SourceSection::PoetryGroup {
            group: "dev".to_string(),
        };
        push_poetry_table(&mut specs, deps, &section);
    }

    if let Some(groups) = poetry.get("group").and_then(Value::as_table) {
        for (group, group_value) in groups {
            if let Some(deps) = group_value.get("dependencies").and_then(Value::as_table) {
                let section = SourceSection::PoetryGroup {
                    group: group.clone(),
                };
                push_poetry_table(&mut specs, deps, &section);
            }
        }
    }

    specs
}

fn push_poetry_table(specs: &mut Vec<DependencySpec>, deps: &toml::Table, section: &SourceSection) {
    for (name, value) in deps {
        // The interpreter constraint is never a package
        if name == "python" {
            continue;
        }
        let Some(value) = PoetryValue::from_value(value) else {
            continue;
        };
        if let Some(constraint) = value.constraint() {
            specs.push(
                DependencySpec::new(name, constraint, section.clone())
                    .with_extras(value.extras()),
            );
        }
    }
}

/// Collects every declaration, uv first then Poetry
pub fn collect_dependency_specs(toml: &Value) -> Vec<DependencySpec> {
    let mut specs = uv_dependency_specs(toml);
    specs.extend(poetry_dependency_specs(toml));
    specs
}

fn to_mapping(specs: Vec<DependencySpec>) -> VersionMapping {
    let mut mapping = VersionMapping::new();
    for spec in specs {
        // Last write wins within one dialect
        mapping.insert(spec.key(), extract_base_version(&spec.version_constraint));
    }
    mapping
}

/// Collects PEP 621 / uv declared base versions
pub fn collect_uv_dependencies(toml: &Value) -> VersionMapping {
    to_mapping(uv_dependency_specs(toml))
}

/// Collects Poetry declared base versions (`python` excluded)
pub fn collect_poetry_dependencies(toml: &Value) -> VersionMapping {
    to_mapping(poetry_dependency_specs(toml))
}

/// Parses manifest text and merges both dialects; uv entries win
pub fn collect_pyproject_versions(content: &str) -> Result<VersionMapping, toml::de::Error> {
    let toml: Value = toml::from_str(content)?;
    Ok(collect_from_value(&toml))
}

/// Merges both dialects from an already parsed manifest; uv entries win
pub fn collect_from_value(toml: &Value) -> VersionMapping {
    let mut versions = collect_poetry_dependencies(toml);
    versions.extend(collect_uv_dependencies(toml));
    versions
}
