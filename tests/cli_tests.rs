//! Cross-command CLI integration tests

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_version_command() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_inside_project_shows_project_info() {
    let project = TestProject::new();
    project.init_project();

    project
        .cmd()
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test-project"));
}

#[test]
fn test_version_flag() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let project = TestProject::new();

    project.cmd().args(["frobnicate"]).assert().failure();
}

#[test]
fn test_install_requires_module_arguments() {
    let project = TestProject::new();
    project.init_project();

    project.cmd().args(["install"]).assert().failure();
}

#[test]
fn test_completions_bash() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("meanie"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let project = TestProject::new();

    project
        .cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_project_flag_points_commands_at_a_directory() {
    let project = TestProject::new();
    project.init_project();

    let mut cmd = project.cmd();
    // Run from outside the project, pointing at it explicitly
    cmd.current_dir(project.temp.path())
        .args(["--project", project.path.to_str().unwrap(), "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test-project"));
}
