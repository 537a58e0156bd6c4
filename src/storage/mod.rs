//! Persistence adapter for HUD settings.
//!
//! Two independent settings are persisted, each under its own key:
//!
//! | key     | value                              |
//! |---------|------------------------------------|
//! | `theme` | `dark` or `light`                  |
//! | `auth`  | `1` while unlocked, absent otherwise |
//!
//! [`Storage`] is the only component that touches durable state. Its
//! contract is infallible: a backend failure on read means "absent", a
//! backend failure on write means "not persisted". Both are logged.

pub mod backend;
mod file;
mod memory;

pub use backend::{BackendType, KvBackend};
pub use file::{FileBackend, STATE_FILE};
pub use memory::MemoryBackend;

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Key holding the authentication marker.
pub const AUTH_KEY: &str = "auth";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HUD_DATA_DIR";

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "orbital-hud";

/// Synchronous key-value store wrapping a [`KvBackend`].
pub struct Storage {
    backend: Box<dyn KvBackend>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("backend", &self.backend.backend_type())
            .field("location", &self.backend.location())
            .finish()
    }
}

impl Storage {
    /// Wrap an arbitrary backend.
    pub fn new(backend: Box<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Open file-backed storage in the given data directory.
    pub fn open(data_dir: &Path) -> Self {
        Self::new(Box::new(FileBackend::new(data_dir)))
    }

    /// Open storage that forgets everything when the process exits.
    pub fn ephemeral() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Open storage for the requested backend type.
    pub fn open_with_backend(backend: BackendType, data_dir: &Path) -> Self {
        match backend {
            BackendType::File => Self::open(data_dir),
            BackendType::Memory => Self::ephemeral(),
        }
    }

    /// Read a value. Backend failures read as absent.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.load(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, location = %self.backend.location(), "failed to read setting, treating as absent");
                None
            }
        }
    }

    /// Write a value. A failed write is logged and otherwise ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.backend.store(key, value) {
            tracing::warn!(key, error = %e, location = %self.backend.location(), "failed to persist setting");
        }
    }

    /// Remove a value. A failed removal is logged and otherwise ignored.
    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.backend.delete(key) {
            tracing::warn!(key, error = %e, location = %self.backend.location(), "failed to remove setting");
        }
    }

    /// Human-readable location of the underlying store.
    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Name of the underlying backend.
    pub fn backend_type(&self) -> &'static str {
        self.backend.backend_type()
    }
}

/// Resolve the data directory.
///
/// Priority: explicit path > `HUD_DATA_DIR` > `<platform data dir>/orbital-hud`.
pub fn get_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| Error::Other("Could not determine data directory".to_string()))?;
    Ok(data_dir.join(APP_DIR_NAME))
}
