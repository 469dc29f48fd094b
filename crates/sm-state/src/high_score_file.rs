//! High score file
//!
//! A single JSON document holding the `HighScore` value:
//!
//! ```json
//! { "high_score": 190 }
//! ```
//!
//! Every write goes straight to disk and is synced before returning.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use sm_core::{SmError, SmResult};
use sm_engine::HighScoreStore;

/// File name inside the config directory
const HIGH_SCORE_FILE: &str = "high_score.json";

/// On-disk document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreDocument {
    high_score: i64,
}

/// High score stored as JSON on disk
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    /// Store at the standard location
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Store at a specific path. Nothing touches the disk until used.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get default high score file path
    pub fn default_path() -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .map(|h| h.join("Library/Application Support/Slot Machine"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .map(|d| d.join("Slot Machine"))
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            // Linux/other
            dirs::config_dir()
                .map(|d| d.join("slot-machine"))
                .unwrap_or_else(|| PathBuf::from("."))
        };
        base.join(HIGH_SCORE_FILE)
    }

    /// Forget the stored value
    pub fn clear(&self) -> SmResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> SmResult<Option<i64>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let doc: HighScoreDocument = serde_json::from_str(&content).map_err(|e| {
            SmError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(doc.high_score))
    }

    fn store(&mut self, value: i64) -> SmResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&HighScoreDocument { high_score: value })?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        debug!("High score {} written to {}", value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_engine::{GameEngine, ScriptedSource, SpinOutcome};

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHighScoreStore::new(dir.path().join("high_score.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("high_score.json");
        let mut store = FileHighScoreStore::new(&path);

        store.store(190).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), Some(190));

        let reopened = FileHighScoreStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(190));
    }

    #[test]
    fn test_document_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");
        let mut store = FileHighScoreStore::new(&path);
        store.store(42).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["high_score"], 42);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");
        fs::write(&path, "not json").unwrap();

        let store = FileHighScoreStore::new(&path);
        assert!(matches!(store.load(), Err(SmError::Serialization(_))));
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScoreStore::new(dir.path().join("high_score.json"));
        store.clear().unwrap();
        store.store(5).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_default_path_file_name() {
        let path = FileHighScoreStore::default_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(HIGH_SCORE_FILE)
        );
    }

    #[test]
    fn test_high_score_survives_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("high_score.json");

        let mut first = GameEngine::new(
            ScriptedSource::always_matching(4),
            FileHighScoreStore::new(&path),
        );
        assert_eq!(first.spin().outcome, SpinOutcome::NewHighScore);
        assert_eq!(first.high_score(), 200);
        drop(first);

        let mut second = GameEngine::new(
            ScriptedSource::always_losing(),
            FileHighScoreStore::new(&path),
        );
        assert_eq!(second.high_score(), 200);
        second.reset();
        assert_eq!(second.high_score(), 200);
    }
}
