//! Tests for help output and global flags

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{TestProject, run_sls_deps};

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("sls-deps")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("attach"))
        .stdout(predicate::str::contains("install"));
}

#[test]
fn test_version() {
    Command::cargo_bin("sls-deps")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    Command::cargo_bin("sls-deps")
        .unwrap()
        .args(["--verbose", "--quiet", "install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_outside_project_fails() {
    let temp = TempDir::new().unwrap();

    run_sls_deps(temp.path(), &["install"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("No serverless project found")
        .assert_stderr_contains("--project-root");
}

#[test]
fn test_explicit_project_root() {
    let project = TestProject::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let root = project.root().to_str().unwrap();

    run_sls_deps(elsewhere.path(), &["--project-root", root, "create", "-n", "utils"])
        .unwrap()
        .assert_success();
    assert!(project.shared_root().join("utils/index.js").is_file());
}

#[test]
fn test_project_root_from_environment() {
    let project = TestProject::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    Command::cargo_bin("sls-deps")
        .unwrap()
        .current_dir(elsewhere.path())
        .env("SLS_DEPS_PROJECT_ROOT", project.root())
        .env("NO_COLOR", "1")
        .args(["--non-interactive", "create", "--name", "env-made"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created shared dependency 'env-made'"));
    assert!(project.shared_root().join("env-made/index.js").is_file());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let project = TestProject::new().unwrap();

    let output = run_sls_deps(project.root(), &["--verbose", "create", "-n", "utils"]).unwrap();
    output.assert_success().assert_single_status_line();
}
