use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrefsError, Result};

/// Get/set port over persisted preferences.
///
/// Reads are infallible: a missing key is simply `None`. Writes may touch the
/// backing medium and can fail.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preference store backed by a flat JSON object on disk.
///
/// A missing file reads as an empty store; every `set` writes the whole file
/// back so a crash never leaves a half-applied toggle.
pub struct FilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`, loading existing values if the file exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    /// Opens the store at its default location under the user's config
    /// directory.
    ///
    /// # Errors
    /// Returns an error if no config directory can be determined, or if an
    /// existing file cannot be read or parsed.
    pub fn open_default() -> Result<Self> {
        let base = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
        Self::open(base.join("vgk-docs").join("prefs.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory preference store for tests and ephemeral runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding for tests.
    #[must_use]
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
