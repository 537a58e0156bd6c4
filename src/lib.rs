//! Orbital HUD - a passphrase-gated operational dashboard.
//!
//! This library provides the presentation-state engine behind the `hud`
//! binary: the persisted theme preference, the session gate, and the
//! composition of status panels from a read-only data snapshot.

pub mod cli;
pub mod commands;
pub mod config;
pub mod hud;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;
pub mod theme;
pub mod tui;

/// Test utilities for isolated test environments.
#[cfg(test)]
pub(crate) mod test_utils {
    use std::path::Path;
    use tempfile::TempDir;

    use crate::storage::{FileBackend, MemoryBackend, Storage};

    /// Test environment with an isolated data directory.
    ///
    /// Use `file_storage()` for tests that need state to survive a
    /// simulated restart, `memory_storage()` for everything else.
    pub struct TestEnv {
        /// Isolated data storage directory
        pub data_dir: TempDir,
    }

    impl TestEnv {
        /// Create a new test environment with an isolated directory.
        pub fn new() -> Self {
            Self {
                data_dir: TempDir::new().unwrap(),
            }
        }

        /// Get the path to the isolated data directory.
        pub fn data_path(&self) -> &Path {
            self.data_dir.path()
        }

        /// Open file-backed storage in this environment.
        ///
        /// Each call returns a fresh handle, which is how tests simulate a
        /// process restart.
        pub fn file_storage(&self) -> Storage {
            Storage::new(Box::new(FileBackend::new(self.data_path())))
        }

        /// Open in-memory storage.
        pub fn memory_storage() -> Storage {
            Storage::new(Box::new(MemoryBackend::new()))
        }
    }

    impl Default for TestEnv {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Library-level error type for HUD operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for HUD operations.
pub type Result<T> = std::result::Result<T, Error>;
