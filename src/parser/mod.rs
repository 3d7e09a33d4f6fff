//! Version constraint parsing for pyproject.toml declarations
//!
//! One dialect family covers both manifest styles:
//! - PEP 621 / uv requirement strings (`requests>=2.28.0`)
//! - Poetry constraint strings (`^2.28.0`)

mod python;

pub use python::{
    extract_base_version, parse_pep621_dependency, parse_requirement, parse_version_spec,
    Requirement,
};
