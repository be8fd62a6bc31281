use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

/// Key under which the dark-mode flag is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// File name of the settings store inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize settings: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// External key-value store for preferences that outlive a session
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Read a boolean flag. Anything other than `"true"` reads as false.
pub fn get_flag(store: &dyn SettingsStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

/// Write a boolean flag in its string form
pub fn set_flag(store: &mut dyn SettingsStore, key: &str, value: bool) -> Result<(), SettingsError> {
    store.set(key, if value { "true" } else { "false" })
}

/// In-memory store (tests, `--ephemeral` runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object of string pairs (written to settings.json).
/// Every `set` rewrites the file atomically.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: IndexMap<String, String>,
}

impl JsonFileStore {
    /// Open the store in `config_dir`. A missing or malformed file reads as empty.
    pub fn open(config_dir: &Path) -> Self {
        let path = config_dir.join(SETTINGS_FILE);
        let values = read_values(&path).unwrap_or_default();
        JsonFileStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// In-memory copy of the current values; later writes never reach the file
    pub fn detached(&self) -> MemoryStore {
        MemoryStore {
            values: self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    fn write(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.values)?;
        let write_err = |source| SettingsError::WriteError {
            path: self.path.clone(),
            source,
        };
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.write_all(b"\n").map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// Open the store for `config_dir`. Ephemeral stores read the saved values
/// once and keep every change in memory.
pub fn open_store(config_dir: &Path, ephemeral: bool) -> Box<dyn SettingsStore> {
    let file = JsonFileStore::open(config_dir);
    if ephemeral {
        Box::new(file.detached())
    } else {
        Box::new(file)
    }
}

fn read_values(path: &Path) -> Option<IndexMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(values) => Some(values),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings file");
            None
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}
