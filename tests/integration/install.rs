//! Tests for `sls-deps install`

use crate::common::{DirAssert, FileAssert, TestProject, run_in};

#[test]
fn test_install_copies_into_each_function() {
    let project = TestProject::new().unwrap();
    project.add_shared("utils").unwrap();
    project.add_shared("db").unwrap();
    project.add_function("hello").unwrap();
    project.add_function("world").unwrap();
    project
        .write_file("hello/package.json", r#"{"customDependencies": {"utils": "local", "db": "local"}}"#)
        .unwrap();
    project
        .write_file("world/package.json", r#"{"customDependencies": {"db": "local"}}"#)
        .unwrap();

    run_in(&project, &["install"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Dependencies installed successfully (3 copied into 2 function(s))");

    DirAssert::entries(project.function_dir("hello").join("node_modules"), &["db", "utils"]);
    DirAssert::entries(project.function_dir("world").join("node_modules"), &["db"]);
    FileAssert::equals(
        project.function_dir("hello").join("node_modules/utils/index.js"),
        "module.exports = 'utils';\n",
    );
}

#[test]
fn test_install_ignores_non_local_sources() {
    let project = TestProject::new().unwrap();
    project.add_shared("utils").unwrap();
    project.add_function("hello").unwrap();
    project
        .write_file("hello/package.json", r#"{"customDependencies": {"utils": "git", "lodash": "npm"}}"#)
        .unwrap();

    run_in(&project, &["install"]).unwrap().assert_success();
    FileAssert::not_exists(project.function_dir("hello").join("node_modules"));
}

#[test]
fn test_install_without_shared_root_fails() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();

    run_in(&project, &["install"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Shared dependency directory not found");
}

#[test]
fn test_install_missing_shared_dependency_copies_nothing() {
    let project = TestProject::new().unwrap();
    project.add_shared("utils").unwrap();
    project.add_function("hello").unwrap();
    project
        .write_file("hello/package.json", r#"{"customDependencies": {"utils": "local", "ghost": "local"}}"#)
        .unwrap();

    run_in(&project, &["install"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Shared dependency 'ghost' not found")
        .assert_stderr_contains("sls-deps create --name ghost");
    FileAssert::not_exists(project.function_dir("hello").join("node_modules"));
}

#[test]
fn test_install_replaces_stale_copy() {
    let project = TestProject::new().unwrap();
    project.add_shared("utils").unwrap();
    project.add_function("hello").unwrap();
    project.write_file("hello/package.json", r#"{"customDependencies": {"utils": "local"}}"#).unwrap();
    project.write_file("hello/node_modules/utils/old.js", "stale").unwrap();

    run_in(&project, &["install"]).unwrap().assert_success();
    DirAssert::entries(project.function_dir("hello").join("node_modules/utils"), &["index.js"]);
}

#[test]
fn test_install_counts_only_functions_that_received_copies() {
    let project = TestProject::new().unwrap();
    project.add_shared("utils").unwrap();
    project.add_function("a").unwrap();
    project.add_function("b").unwrap();
    project.add_function("c").unwrap();
    project.write_file("a/package.json", r#"{"customDependencies": {"utils": "local"}}"#).unwrap();
    project.write_file("b/package.json", r#"{"customDependencies": {"lodash": "npm"}}"#).unwrap();

    run_in(&project, &["install"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("(1 copied into 1 function(s))");
}
