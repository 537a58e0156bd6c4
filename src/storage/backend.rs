//! Storage backend trait and implementations.
//!
//! This module provides different key-value backends for HUD settings:
//! - `FileBackend` - JSON state file in the data directory (default)
//! - `MemoryBackend` - In-process map, nothing survives the process

use crate::Result;

/// Trait for backends that persist string values by string key.
///
/// Backends report failures; the [`Storage`](super::Storage) adapter decides
/// what a failure means for the caller.
pub trait KvBackend: Send {
    /// Read a value. `Ok(None)` means the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn store(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Get the storage location description (for display purposes).
    fn location(&self) -> String;

    /// Get the backend type name.
    fn backend_type(&self) -> &'static str;
}

/// Available storage backend types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// JSON state file under the data directory (default)
    File,
    /// In-memory only, used by `--ephemeral`
    Memory,
}

impl BackendType {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
