//! depsync - pyproject.toml version sync library
//!
//! This library rewrites the dependency versions declared in a project's
//! pyproject.toml to the exact versions resolved by its lock file:
//! - uv (uv.lock) with PEP 621 and PEP 735 declarations
//! - Poetry (poetry.lock) with `[tool.poetry]` declarations
//!
//! Only the base version of each constraint changes; operators, range
//! bounds, extras, markers, comments and formatting are kept as written.

pub mod cli;
pub mod domain;
pub mod error;
pub mod lock;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;

pub use orchestrator::replace_versions;
