//! Create command integration tests
#![cfg(unix)]

mod common;

use common::TestProject;
use predicates::prelude::*;

fn publish_core(project: &TestProject) {
    project.publish_module(
        "core",
        "1.0.0",
        "{}",
        &[
            ("src/server/app.js", "// app"),
            ("src/client/app/app.js", "// client app"),
        ],
    );
}

#[test]
fn test_create_scaffolds_project() {
    let project = TestProject::new();
    publish_core(&project);

    project
        .cmd()
        .args(["create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created meaniefile"))
        .stdout(predicate::str::contains("created successfully"));

    assert!(project.file_exists("meaniefile.json"));
    assert!(project.file_exists("server/app.js"));
    assert_eq!(project.installed_version("core").as_deref(), Some("1.0.0"));
}

#[test]
fn test_create_into_new_directory() {
    let project = TestProject::new();
    publish_core(&project);

    project
        .cmd()
        .args(["create", "my-app"])
        .assert()
        .success();

    assert!(project.file_exists("my-app/meaniefile.json"));
    let config: serde_json::Value =
        serde_json::from_str(&project.read_file("my-app/meaniefile.json")).unwrap();
    assert_eq!(config["name"], "my-app");
    assert_eq!(config["cliVersion"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_create_into_existing_empty_directory() {
    let project = TestProject::new();
    publish_core(&project);
    std::fs::create_dir_all(project.path.join("empty-dir")).unwrap();

    project
        .cmd()
        .args(["create", "empty-dir"])
        .assert()
        .success();

    assert!(project.file_exists("empty-dir/meaniefile.json"));
}

#[test]
fn test_create_refuses_non_empty_directory() {
    let project = TestProject::new();
    publish_core(&project);
    project.write_file("occupied/notes.txt", "keep me");

    project
        .cmd()
        .args(["create", "occupied"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert!(!project.file_exists("occupied/meaniefile.json"));
}

#[test]
fn test_create_forced_over_non_empty_directory() {
    let project = TestProject::new();
    publish_core(&project);
    project.write_file("occupied/notes.txt", "keep me");

    project
        .cmd()
        .args(["create", "occupied", "--force"])
        .assert()
        .success();

    assert!(project.file_exists("occupied/meaniefile.json"));
    assert_eq!(project.read_file("occupied/notes.txt"), "keep me");
}

#[test]
fn test_create_retries_over_leftover_meaniefile() {
    let project = TestProject::new();
    publish_core(&project);
    project.init_project();

    project.cmd().args(["create"]).assert().success();

    assert_eq!(project.installed_version("core").as_deref(), Some("1.0.0"));
}

#[test]
fn test_create_aborts_when_core_module_unavailable() {
    let project = TestProject::new();
    // Core module is never published

    project
        .cmd()
        .args(["create", "doomed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create project"));
}
