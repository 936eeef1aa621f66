//! Tests for `sls-deps attach`

use serde_json::json;

use crate::common::{FileAssert, TestProject, run_in};

fn manifest(project: &TestProject, function: &str) -> serde_json::Value {
    FileAssert::json(project.function_dir(function).join("package.json"))
}

#[test]
fn test_attach_to_selected_functions() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();
    project.add_function("users-get").unwrap();
    project.add_function("untouched").unwrap();

    let output =
        run_in(&project, &["attach", "--name", "utils", "-f", "hello", "-f", "users-get"]).unwrap();
    output.assert_success().assert_stdout_contains("Attached 'utils' to 2 function(s)");

    assert_eq!(manifest(&project, "hello")["customDependencies"], json!({ "utils": "local" }));
    assert_eq!(manifest(&project, "users-get")["customDependencies"], json!({ "utils": "local" }));
    assert!(manifest(&project, "untouched").get("customDependencies").is_none());
}

#[test]
fn test_attach_keeps_manifest_layout() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();

    run_in(&project, &["attach", "-n", "utils", "-f", "hello"]).unwrap().assert_success();

    FileAssert::equals(
        project.function_dir("hello").join("package.json"),
        "{\n  \"name\": \"hello\",\n  \"version\": \"1.0.0\",\n  \"main\": \"handler.js\",\n  \
         \"customDependencies\": {\n    \"utils\": \"local\"\n  }\n}\n",
    );
}

#[test]
fn test_attach_is_idempotent() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();
    run_in(&project, &["attach", "-n", "utils", "-f", "hello"]).unwrap().assert_success();
    let path = project.function_dir("hello").join("package.json");
    let first = std::fs::read_to_string(&path).unwrap();

    run_in(&project, &["attach", "-n", "utils", "-f", "hello"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("already attached to 1 function(s)");

    FileAssert::equals(&path, &first);
}

#[test]
fn test_attach_unknown_function_lists_available() {
    let project = TestProject::new().unwrap();
    project.add_function("alpha").unwrap();
    project.add_function("beta").unwrap();

    let output = run_in(&project, &["attach", "-n", "utils", "-f", "alpha", "-f", "gamma"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Function 'gamma' not found")
        .assert_stderr_contains("Available functions: alpha, beta");

    assert!(manifest(&project, "alpha").get("customDependencies").is_none());
}

#[test]
fn test_attach_without_functions_is_noop() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();

    run_in(&project, &["attach", "-n", "utils"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("No functions selected");
    assert!(manifest(&project, "hello").get("customDependencies").is_none());
}

#[test]
fn test_attach_in_project_without_functions() {
    let project = TestProject::new().unwrap();

    run_in(&project, &["attach", "-n", "utils"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("No functions found");
}

#[test]
fn test_attach_named_function_in_empty_project_fails() {
    let project = TestProject::new().unwrap();

    run_in(&project, &["attach", "-n", "utils", "-f", "nope"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Function 'nope' not found")
        .assert_stderr_contains("does not contain any functions");
}

#[test]
fn test_attach_reports_broken_manifest_and_updates_others() {
    let project = TestProject::new().unwrap();
    project.add_function("alpha").unwrap();
    project.add_function("broken").unwrap();
    project.add_function("gamma").unwrap();
    project.write_file("broken/package.json", "{ \"name\": ").unwrap();

    let output = run_in(
        &project,
        &["attach", "-n", "utils", "-f", "alpha", "-f", "broken", "-f", "gamma"],
    )
    .unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("broken")
        .assert_stderr_contains("Failed to attach 'utils' to 1 of 3 function(s)");

    assert_eq!(manifest(&project, "alpha")["customDependencies"]["utils"], "local");
    assert_eq!(manifest(&project, "gamma")["customDependencies"]["utils"], "local");
    FileAssert::equals(project.function_dir("broken").join("package.json"), "{ \"name\": ");
}

#[test]
fn test_attach_invalid_name_fails_before_discovery() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();

    run_in(&project, &["attach", "-n", "no/slashes", "-f", "hello"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Invalid dependency name");
    assert!(manifest(&project, "hello").get("customDependencies").is_none());
}
