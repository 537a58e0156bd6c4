//! Common test utilities for HUD integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's `~/.local/share/orbital-hud/` or `~/.config/orbital-hud/`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with isolated data and config directories.
///
/// The `hud()` method returns a `Command` that sets `HUD_DATA_DIR` and
/// `HUD_CONFIG` per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub data_dir: TempDir,
    pub config_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
            config_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the hud binary with isolated directories.
    pub fn hud(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hud"));
        cmd.env("HUD_DATA_DIR", self.data_dir.path());
        cmd.env("HUD_CONFIG", self.config_path());
        cmd.env_remove("HUD_DATA");
        cmd.env_remove("HUD_LOG");
        cmd
    }

    /// Submit a passphrase through `hud login`.
    pub fn login(&self, passphrase: &str) -> assert_cmd::assert::Assert {
        self.hud()
            .arg("login")
            .write_stdin(format!("{}\n", passphrase))
            .assert()
    }

    pub fn data_path(&self) -> &Path {
        self.data_dir.path()
    }

    /// Where `hud` looks for config.kdl in this environment.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.kdl")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config file");
    }

    /// Path of the persisted settings file.
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.path().join("state.json")
    }

    /// Persisted settings, or an empty object if nothing was written yet.
    pub fn state(&self) -> serde_json::Value {
        match fs::read_to_string(self.state_path()) {
            Ok(content) => serde_json::from_str(&content).expect("state.json is not JSON"),
            Err(_) => serde_json::json!({}),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command's stdout as JSON.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is not JSON")
}
