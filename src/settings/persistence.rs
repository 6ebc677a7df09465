//! File-backed settings persistence
//!
//! Stores the flat key-value map as a single TOML table; hierarchical
//! `section/key` names become quoted TOML keys. All reads and writes stay
//! in memory, and [`FileBackend::sync`] makes the current state durable.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::settings::backend::{SettingsBackend, SettingsValue};
use crate::settings::SettingsError;

/// Settings backend persisted to a TOML file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    values: BTreeMap<String, SettingsValue>,
}

impl FileBackend {
    /// Opens the store at `path`, starting empty when the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values: BTreeMap<String, SettingsValue> = match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(SettingsError::Io(err)),
        };
        tracing::debug!("loaded {} settings from {}", values.len(), path.display());
        Ok(Self { path, values })
    }

    /// Resolves the per-user settings file location, when the platform has
    /// a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glyphsmith").join("settings.toml"))
    }

    /// The file this backend reads from and syncs to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current state to disk, creating parent directories as
    /// needed.
    pub fn sync(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        tracing::debug!("synced {} settings to {}", self.values.len(), self.path.display());
        Ok(())
    }
}

impl SettingsBackend for FileBackend {
    fn get(&self, key: &str) -> Option<SettingsValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: String, value: SettingsValue) {
        self.values.insert(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
