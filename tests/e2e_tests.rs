//! End-to-end tests for the depsync CLI
//!
//! These tests verify:
//! - Dry-run and check modes leave files unchanged
//! - CLI produces the expected JSON and diff output
//! - Exit codes are correct for various scenarios

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const UV_LOCK: &str = r#"version = 1

[[package]]
name = "click"
version = "8.2.0"

[[package]]
name = "rich"
version = "13.7.1"
"#;

const PYPROJECT: &str = r#"[project]
name = "test-project"
version = "0.1.0"
dependencies = [
    "click>=8.0.0",
    "rich>=13.0",
]
"#;

/// Create a test directory with a uv project
fn create_test_project() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("uv.lock"), UV_LOCK).unwrap();
    fs::write(temp_dir.path().join("pyproject.toml"), PYPROJECT).unwrap();
    temp_dir
}

/// Get a Command for the depsync binary
fn depsync() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("depsync"))
}

fn read_manifest(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("pyproject.toml")).unwrap()
}

mod sync_tests {
    use super::*;

    #[test]
    fn test_sync_directory_rewrites_manifest() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("2 constraint(s) synced with uv.lock"));

        let content = read_manifest(&temp_dir);
        assert!(content.contains("\"click>=8.2.0\","));
        assert!(content.contains("\"rich>=13.7.1\","));
    }

    #[test]
    fn test_sync_explicit_lock_path() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path().join("uv.lock"))
            .assert()
            .success();

        assert!(read_manifest(&temp_dir).contains("\"click>=8.2.0\","));
    }

    #[test]
    fn test_second_run_reports_in_sync() {
        let temp_dir = create_test_project();

        depsync().arg(temp_dir.path()).assert().success();
        depsync()
            .arg(temp_dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Already in sync with uv.lock"));
    }
}

mod dry_run_tests {
    use super::*;

    #[test]
    fn test_dry_run_leaves_files_unchanged() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path())
            .arg("--dry-run")
            .assert()
            .success()
            .stdout(predicate::str::contains("(dry-run)"))
            .stdout(predicate::str::contains("out of sync"));

        assert_eq!(read_manifest(&temp_dir), PYPROJECT);
    }

    #[test]
    fn test_check_out_of_sync_exits_one() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path())
            .arg("--check")
            .assert()
            .code(1);

        assert_eq!(read_manifest(&temp_dir), PYPROJECT);
    }

    #[test]
    fn test_check_in_sync_exits_zero() {
        let temp_dir = create_test_project();
        depsync().arg(temp_dir.path()).assert().success();

        depsync()
            .arg(temp_dir.path())
            .arg("--check")
            .assert()
            .success();
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_json_output_schema() {
        let temp_dir = create_test_project();

        let output = depsync()
            .arg(temp_dir.path())
            .args(["--json", "--dry-run"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["written"], false);
        assert_eq!(json["summary"]["changes"], 2);
        assert_eq!(json["changes"][0]["name"], "click");
        assert_eq!(json["changes"][0]["from"], ">=8.0.0");
        assert_eq!(json["changes"][0]["to"], ">=8.2.0");
        assert_eq!(json["changes"][0]["section"], "project.dependencies");
    }

    #[test]
    fn test_diff_output_mode() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path())
            .args(["--diff", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("@@ -5,1 +5,1 @@"))
            .stdout(predicate::str::contains("-    \"click>=8.0.0\","))
            .stdout(predicate::str::contains("+    \"click>=8.2.0\","));
    }

    #[test]
    fn test_quiet_mode() {
        let temp_dir = create_test_project();

        depsync()
            .arg(temp_dir.path())
            .arg("-q")
            .assert()
            .success()
            .stdout("2 constraint(s) synced with uv.lock\n");
    }
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_exit_code_help() {
        depsync()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--check"));
    }

    #[test]
    fn test_exit_code_version() {
        depsync()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("depsync"));
    }

    #[test]
    fn test_exit_code_unsupported_lock() {
        let temp_dir = create_test_project();
        let lock = temp_dir.path().join("invalid.lock");
        fs::write(&lock, "").unwrap();

        depsync()
            .arg(&lock)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Unsupported lock file: invalid.lock"));
    }

    #[test]
    fn test_exit_code_no_lock_in_directory() {
        let temp_dir = tempfile::tempdir().unwrap();

        depsync()
            .arg(temp_dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("no uv.lock or poetry.lock found"));
    }

    #[test]
    fn test_exit_code_missing_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("poetry.lock"), "").unwrap();

        depsync()
            .arg(temp_dir.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("manifest file not found"));
    }
}
