//! Headless rendering, data files and config.kdl precedence.

mod common;

use common::{TestEnv, parse_json};
use orbital_hud::session::PASSPHRASE;
use predicates::prelude::*;

fn unlocked() -> TestEnv {
    let env = TestEnv::new();
    env.login(PASSPHRASE).success();
    env
}

fn panel_kinds(view: &serde_json::Value) -> Vec<String> {
    view["screen"]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["panels"].as_array().unwrap().iter())
        .map(|p| p["kind"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_locked_render_shows_gate_only() {
    let env = TestEnv::new();
    env.hud()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("Docking"))
        .stdout(predicate::str::contains("[ Passphrase ]"))
        .stdout(predicate::str::contains("System Pulse").not());
}

#[test]
fn test_unlocked_render_default_layout() {
    let env = unlocked();
    let output = env.hud().args(["render", "--json"]).output().unwrap();
    assert!(output.status.success());

    let view = parse_json(&output.stdout);
    assert_eq!(view["theme"], "dark");
    assert_eq!(view["dark"], true);
    assert_eq!(view["screen"]["screen"], "dashboard");
    assert_eq!(
        panel_kinds(&view),
        vec![
            "skills",
            "missing_tools",
            "pulse",
            "security",
            "connections",
            "projects",
            "crons"
        ]
    );
}

#[test]
fn test_render_standard_truncated() {
    let env = unlocked();
    env.hud()
        .args(["render", "--layout", "standard", "--skills-limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Skills =="))
        .stdout(predicate::str::contains("+ 1 more"))
        .stdout(predicate::str::contains("Tokens (24h): 183,240"))
        .stdout(predicate::str::contains("Cost (24h): $7.92"))
        .stdout(predicate::str::contains("== Security ==").not());
}

#[test]
fn test_render_follows_theme() {
    let env = unlocked();
    env.hud().args(["theme", "toggle"]).assert().success();
    let output = env.hud().args(["render", "--json"]).output().unwrap();
    let view = parse_json(&output.stdout);
    assert_eq!(view["theme"], "light");
    assert_eq!(view["dark"], false);
}

#[test]
fn test_config_file_sets_layout() {
    let env = unlocked();
    env.write_config("layout \"standard\"\nskills-limit 2\n");

    env.hud()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ 4 more"))
        .stdout(predicate::str::contains("== Security ==").not());

    env.hud()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout:   standard [config]"));
}

#[test]
fn test_cli_flag_beats_config_file() {
    let env = unlocked();
    env.write_config("layout \"standard\"\n");

    env.hud()
        .args(["status", "--layout", "extended"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout:   extended [cli]"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write_config("layout \"sideways\"\n");

    env.hud()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("`layout`"));
}

#[test]
fn test_render_from_data_file() {
    let env = unlocked();
    let mut data = serde_json::to_value(orbital_hud::models::Snapshot::builtin()).unwrap();
    data["skills"] = serde_json::json!([
        {"name": "only-skill", "status": "off"}
    ]);
    let path = env.data_path().join("snapshot.json");
    std::fs::write(&path, data.to_string()).unwrap();

    env.hud()
        .args(["render", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Skills (1) =="))
        .stdout(predicate::str::contains("✗ only-skill [off]"));
}

#[test]
fn test_invalid_data_file() {
    let env = unlocked();
    let path = env.data_path().join("bad.json");
    std::fs::write(&path, r#"{"skills": 3}"#).unwrap();

    env.hud()
        .args(["render", "--data"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid data"));
}

#[test]
fn test_missing_data_file() {
    let env = unlocked();
    env.hud()
        .args(["render", "--data"])
        .arg(env.data_path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_cli_skills_limit_beats_config_show_all() {
    let env = unlocked();
    env.write_config("show-all-skills #true\n");

    env.hud()
        .args(["render", "--skills-limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Skills =="))
        .stdout(predicate::str::contains("+ 4 more"))
        .stdout(predicate::str::contains("== Skills (6) ==").not());

    env.hud()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Skills (6) =="));
}
