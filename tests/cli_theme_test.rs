//! Theme preference through the CLI.

mod common;

use common::{TestEnv, parse_json};
use predicates::prelude::*;

#[test]
fn test_default_theme_is_dark() {
    let env = TestEnv::new();
    env.hud()
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
    assert!(env.state().get("theme").is_none());
}

#[test]
fn test_toggle_parity_across_restarts() {
    let env = TestEnv::new();

    for i in 1..=5 {
        env.hud().args(["theme", "toggle"]).assert().success();

        let expected = if i % 2 == 1 { "light" } else { "dark" };
        let output = env.hud().args(["theme", "show", "--json"]).output().unwrap();
        let json = parse_json(&output.stdout);
        assert_eq!(json["theme"], expected, "after {} toggles", i);
        assert_eq!(env.state()["theme"], expected);
    }
}

#[test]
fn test_theme_set() {
    let env = TestEnv::new();
    env.hud()
        .args(["theme", "set", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light."));

    let output = env.hud().args(["theme", "set", "light", "--json"]).output().unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["changed"], false);
    assert_eq!(json["dark"], false);
}

#[test]
fn test_unknown_persisted_theme_reads_as_dark() {
    let env = TestEnv::new();
    std::fs::write(env.state_path(), r#"{"theme":"solarized"}"#).unwrap();
    env.hud()
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
}

#[test]
fn test_theme_and_session_are_independent() {
    let env = TestEnv::new();
    env.hud().args(["theme", "toggle"]).assert().success();
    env.login(orbital_hud::session::PASSPHRASE).success();
    env.hud().arg("logout").assert().success();

    assert_eq!(env.state()["theme"], "light");
    assert!(env.state().get("auth").is_none());
}
