//! Preference Storage
//!
//! Browser-local storage analog: two small string slots persisted across
//! sessions. The file backend keeps a JSON map under the platform config
//! directory and writes through on every change; the memory backend
//! serves tests and environments without a usable home directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

const PREFS_FILE: &str = "preferences.json";

/// Persisted key/value preference slots
pub trait PreferenceStorage: Send {
    /// Read a slot
    fn get(&self, key: &str) -> Option<String>;
    /// Write a slot
    fn set(&mut self, key: &str, value: &str);
    /// Clear a slot
    fn remove(&mut self, key: &str);
}

/// In-memory storage
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    map: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
    }
}

/// JSON-file-backed storage, write-through
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage at the platform default location
    pub fn open_default() -> Result<Self> {
        let Some(project_dirs) = ProjectDirs::from("com", "encodius", "encodius-site") else {
            return Err(Error::Invalid {
                message: "Could not determine project directories".to_string(),
            });
        };

        let config_dir = project_dirs.config_dir();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        Self::open(config_dir.join(PREFS_FILE))
    }

    /// Open storage at an explicit path (tests use a temp dir)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let map = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!("Discarding unreadable preference file: {e}");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, map })
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let write = || -> Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(&self.map)?;
            fs::write(&self.path, content)?;
            Ok(())
        };
        // Storage failures degrade to session-only preferences
        if let Err(e) = write() {
            tracing::warn!("Failed to persist preferences: {e}");
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
        self.persist();
    }
}
