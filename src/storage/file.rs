//! File-backed key-value storage.
//!
//! All keys live in a single JSON object at `<data-dir>/state.json`:
//!
//! ```json
//! {"auth":"1","theme":"light"}
//! ```
//!
//! Writes go to a temporary file in the same directory which is then renamed
//! over the state file, so a crash mid-write leaves the previous contents.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::backend::KvBackend;
use crate::Result;

/// File name of the state file inside the data directory.
pub const STATE_FILE: &str = "state.json";

/// Key-value backend persisting to a JSON file.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `data_dir`. Nothing is created on disk
    /// until the first write.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            dir: data_dir.to_path_buf(),
            path: data_dir.join(STATE_FILE),
        }
    }

    /// Get the path to the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the map for a read-modify-write cycle. A corrupt file is
    /// replaced rather than blocking every future write.
    fn read_map_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.read_map() {
            Ok(map) => Ok(map),
            Err(crate::Error::Json(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt state file");
                Ok(BTreeMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string(map)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn store(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map_for_update()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let mut map = self.read_map_for_update()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn backend_type(&self) -> &'static str {
        "file"
    }
}
