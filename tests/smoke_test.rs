//! Smoke tests for the HUD CLI.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

fn hud() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hud"))
}

#[test]
fn test_version_flag() {
    hud()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hud"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    hud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_theme_help() {
    hud()
        .args(["theme", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("toggle"));
}

#[test]
fn test_unknown_command_fails() {
    hud().arg("launch").assert().failure();
}

#[test]
fn test_status_on_fresh_data_dir() {
    let env = TestEnv::new();
    env.hud()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session:  locked"))
        .stdout(predicate::str::contains("Theme:    dark"));
}

#[test]
fn test_unusable_data_dir_is_not_fatal_for_tui() {
    let env = TestEnv::new();
    let file = env.data_path().join("not-a-dir");
    std::fs::write(&file, "").unwrap();

    // stdout is a pipe here, so startup stops at the terminal check
    env.hud()
        .env("HUD_DATA_DIR", file.join("sub"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Warning: logging disabled"))
        .stderr(predicate::str::contains("needs a terminal"))
        .stderr(predicate::str::contains("Error: IO error").not());
}

#[test]
fn test_unusable_data_dir_headless_commands_still_work() {
    let env = TestEnv::new();
    let file = env.data_path().join("not-a-dir");
    std::fs::write(&file, "").unwrap();

    env.hud()
        .env("HUD_DATA_DIR", file.join("sub"))
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));
}
