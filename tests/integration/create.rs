//! Tests for `sls-deps create`

use crate::common::{DirAssert, FileAssert, TestProject, run_in};

#[test]
fn test_create_scaffolds_entry_file() {
    let project = TestProject::new().unwrap();

    let output = run_in(&project, &["create", "--name", "utils"]).unwrap();
    output
        .assert_success()
        .assert_single_status_line()
        .assert_stdout_contains("Created shared dependency 'utils'")
        .assert_stdout_contains("shared/utils/index.js");

    let entry = project.shared_root().join("utils/index.js");
    FileAssert::contains(&entry, "'use strict';");
    FileAssert::contains(&entry, "utils");
    DirAssert::entries(project.shared_root().join("utils"), &["index.js"]);
}

#[test]
fn test_create_twice_leaves_existing_files() {
    let project = TestProject::new().unwrap();
    run_in(&project, &["create", "-n", "utils"]).unwrap().assert_success();

    let entry = project.shared_root().join("utils/index.js");
    std::fs::write(&entry, "module.exports = { edited: true };\n").unwrap();

    let output = run_in(&project, &["create", "-n", "utils"]).unwrap();
    output.assert_success().assert_stdout_contains("already exists");
    FileAssert::equals(&entry, "module.exports = { edited: true };\n");
}

#[test]
fn test_create_rejects_invalid_names() {
    let project = TestProject::new().unwrap();

    for name in ["bad name", "../escape", "this-name-is-far-too-long", ""] {
        let output = run_in(&project, &["create", "--name", name]).unwrap();
        output.assert_failure().assert_stderr_contains("Invalid dependency name");
    }
    FileAssert::not_exists(project.shared_root());
}

#[test]
fn test_create_accepts_boundary_length() {
    let project = TestProject::new().unwrap();
    let name = "a".repeat(20);

    run_in(&project, &["create", "--name", &name]).unwrap().assert_success();
    DirAssert::exists(project.shared_root().join(&name));
}

#[test]
fn test_create_without_name_requires_flag() {
    let project = TestProject::new().unwrap();

    let output = run_in(&project, &["create"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("A dependency name is required")
        .assert_stderr_contains("--name <NAME>");
    FileAssert::not_exists(project.shared_root());
}

#[test]
fn test_create_with_legacy_layout() {
    let project = TestProject::new().unwrap();
    project.write_config("layout = \"legacy\"\n").unwrap();

    run_in(&project, &["create", "--name", "utils"]).unwrap().assert_success();
    FileAssert::exists(project.root().join("libs/utils/index.js"));
    FileAssert::not_exists(project.shared_root());
}

#[test]
fn test_create_with_configured_extension() {
    let project = TestProject::new().unwrap();
    project.write_config("entry-extension = \"py\"\n").unwrap();

    run_in(&project, &["create", "--name", "helpers"]).unwrap().assert_success();
    FileAssert::exists(project.shared_root().join("helpers/index.py"));
}

#[test]
fn test_create_with_shared_dir_flag() {
    let project = TestProject::new().unwrap();

    run_in(&project, &["--shared-dir", "lib/common", "create", "--name", "utils"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("lib/common/utils/index.js");
    FileAssert::exists(project.root().join("lib/common/utils/index.js"));
}

#[test]
fn test_create_rejects_unknown_config_keys() {
    let project = TestProject::new().unwrap();
    project.write_config("shared_directory = \"x\"\n").unwrap();

    run_in(&project, &["create", "--name", "utils"]).unwrap().assert_failure();
    FileAssert::not_exists(project.shared_root());
}

#[test]
fn test_create_with_overlong_extension_creates_nothing() {
    let project = TestProject::new().unwrap();
    project.write_config(&format!("entry-extension = \"{}\"\n", "x".repeat(300))).unwrap();

    run_in(&project, &["create", "--name", "utils"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("entry-extension");
    FileAssert::not_exists(project.shared_root());

    project.write_config("entry-extension = \"js\"\n").unwrap();
    run_in(&project, &["create", "--name", "utils"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("Created shared dependency 'utils'");
}
