//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The terminal UI owns the screen, so it
//! logs JSON lines to `<data-dir>/hud.log` instead.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "HUD_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "hud.log";

/// Filter directive used when `HUD_LOG` is unset.
///
/// `-v` flags win over the config file's `log-level`; with neither, only
/// warnings and errors are shown.
pub fn default_directive(config_level: Option<&str>, verbosity: u8) -> String {
    let level = match (verbosity, config_level) {
        (0, Some(level)) => level,
        (0, None) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    format!("orbital_hud={level},hud={level}")
}

fn build_filter(config_level: Option<&str>, verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config_level, verbosity)))
}

/// Install a stderr subscriber for headless commands.
pub fn init_stderr(config_level: Option<&str>, verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level, verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Open `<data-dir>/hud.log` for appending, creating the directory.
fn file_appender(data_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(data_dir)?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(data_dir)
        .map_err(|e| Error::Other(format!("cannot open {}: {}", data_dir.join(LOG_FILE).display(), e)))
}

/// Install a JSON file subscriber for the terminal UI.
///
/// Returns the log file path. On error nothing is installed and the caller
/// decides whether to run without logs.
pub fn init_file(data_dir: &Path, config_level: Option<&str>, verbosity: u8) -> Result<PathBuf> {
    let appender = file_appender(data_dir)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level, verbosity))
        .json()
        .with_target(true)
        .with_ansi(false)
        .with_writer(appender)
        .try_init();
    Ok(data_dir.join(LOG_FILE))
}
