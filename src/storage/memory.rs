//! In-memory key-value storage.

use std::collections::HashMap;

use super::backend::KvBackend;
use crate::Result;

/// Backend that keeps values for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }

    fn location(&self) -> String {
        "(memory)".to_string()
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
