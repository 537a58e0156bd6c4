//! Sources of [`Snapshot`]s.

use std::fs;
use std::path::{Path, PathBuf};

use super::Snapshot;
use crate::{Error, Result};

/// Supplies the read-only data set the HUD renders.
///
/// The HUD depends only on the shape of the snapshot, never on where it
/// came from or how it is refreshed.
pub trait DataProvider {
    /// Produce a validated snapshot.
    fn load(&self) -> Result<Snapshot>;

    /// Short description for status output and logs.
    fn describe(&self) -> String;
}

/// Serves the bundled data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider;

impl DataProvider for BuiltinProvider {
    fn load(&self) -> Result<Snapshot> {
        Ok(Snapshot::builtin())
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// Reads a snapshot from a JSON file.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for FileProvider {
    fn load(&self) -> Result<Snapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(format!("data file {}", self.path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|e| {
            Error::InvalidData(format!("{}: {}", self.path.display(), e))
        })?;
        snapshot.validate()?;

        tracing::debug!(path = %self.path.display(), skills = snapshot.skills.len(), "loaded data file");
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a provider: a data file when given, the bundled set otherwise.
pub fn provider_for(path: Option<&Path>) -> Box<dyn DataProvider> {
    match path {
        Some(path) => Box::new(FileProvider::new(path)),
        None => Box::new(BuiltinProvider),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_provider() {
        let snapshot = BuiltinProvider.load().unwrap();
        assert_eq!(snapshot.skills.len(), 6);
        assert_eq!(BuiltinProvider.describe(), "builtin");
    }

    #[test]
    fn test_file_provider_round_trips_builtin() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, serde_json::to_string_pretty(&Snapshot::builtin()).unwrap()).unwrap();

        let loaded = FileProvider::new(&path).load().unwrap();
        assert_eq!(loaded, Snapshot::builtin());
    }

    #[test]
    fn test_file_provider_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FileProvider::new(dir.path().join("nope.json")).load().unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_file_provider_rejects_bad_status() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut json = serde_json::to_value(Snapshot::builtin()).unwrap();
        json["skills"][0]["status"] = serde_json::Value::String("broken".to_string());
        fs::write(&path, json.to_string()).unwrap();

        let err = FileProvider::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_file_provider_runs_validation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let mut snapshot = Snapshot::builtin();
        snapshot.crons[0].schedule = "0 8 * *".to_string();
        fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        assert!(matches!(
            FileProvider::new(&path).load().unwrap_err(),
            Error::InvalidData(_)
        ));
    }

    #[test]
    fn test_provider_for() {
        assert_eq!(provider_for(None).describe(), "builtin");
        assert_eq!(provider_for(Some(Path::new("/tmp/x.json"))).describe(), "/tmp/x.json");
    }
}
