//! End-to-end workflow tests

use crate::common::{FileAssert, TestProject, run_in, run_sls_deps};

#[test]
fn test_create_attach_install() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();
    project.add_function("users-get").unwrap();

    run_in(&project, &["create", "--name", "utils"]).unwrap().assert_success();
    run_in(&project, &["attach", "--name", "utils", "--function", "hello"])
        .unwrap()
        .assert_success();
    run_in(&project, &["install"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("1 copied into 1 function(s)");

    FileAssert::contains(
        project.function_dir("hello").join("node_modules/utils/index.js"),
        "utils",
    );
    FileAssert::not_exists(project.function_dir("users-get").join("node_modules"));
}

#[test]
fn test_commands_work_from_subdirectory() {
    let project = TestProject::new().unwrap();
    project.add_function("hello").unwrap();
    let nested = project.function_dir("hello");

    run_sls_deps(&nested, &["create", "-n", "utils"]).unwrap().assert_success();
    run_sls_deps(&nested, &["attach", "-n", "utils", "-f", "hello"]).unwrap().assert_success();
    run_sls_deps(&nested, &["install"]).unwrap().assert_success();

    FileAssert::exists(project.shared_root().join("utils/index.js"));
    FileAssert::exists(nested.join("node_modules/utils/index.js"));
}

#[test]
fn test_nested_functions_are_discovered() {
    let project = TestProject::new().unwrap();
    project.write_file("api/users/get/s-function.json", r#"{"name": "users-get"}"#).unwrap();
    project.write_file("api/users/get/package.json", r#"{"name": "users-get"}"#).unwrap();
    project.add_shared("utils").unwrap();

    run_in(&project, &["attach", "-n", "utils", "-f", "users-get"]).unwrap().assert_success();
    run_in(&project, &["install"]).unwrap().assert_success();

    FileAssert::exists(project.root().join("api/users/get/node_modules/utils/index.js"));
}
