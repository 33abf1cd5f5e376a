//! JSON file-based preference store.
//!
//! A small, human-readable backend using JSON serialization with atomic file
//! writes (write-to-temp + rename) so a crash mid-write never leaves a
//! corrupt preference file. The whole dataset is three values, so the entire
//! file is kept in memory and rewritten on each change.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::{AtlascopeError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::Preferences;

/// Top-level container serialized to disk.
///
/// Wraps the preferences with a version field for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format.
    version: u32,

    /// The persisted preferences.
    #[serde(default)]
    preferences: Preferences,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: Preferences::default(),
        }
    }
}

/// JSON file preference backend.
///
/// # File format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "dark_mode": true,
///     "paginated": true,
///     "view_mode": "list"
///   }
/// }
/// ```
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data, loaded on creation.
    data: StorageData,
}

impl JsonPreferences {
    /// Creates or opens the preference file.
    ///
    /// An existing file is loaded; a missing one starts from defaults (the
    /// file appears on the first write). Parent directories are created
    /// automatically. A file that exists but fails to parse is treated as
    /// defaults rather than blocking startup, with the parse failure logged.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation or the initial read
    /// fails at the I/O level.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            let contents = std::fs::read_to_string(&file_path)?;
            match serde_json::from_str::<StorageData>(&contents) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, "preference file unreadable, using defaults");
                    StorageData::default()
                }
            }
        } else {
            StorageData::default()
        };

        tracing::debug!(preferences = ?data.preferences, "preference store initialized");

        Ok(Self { file_path, data })
    }

    /// Saves to disk using an atomic temp-write-then-rename.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| AtlascopeError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn load(&self) -> Preferences {
        self.data.preferences
    }

    fn update(&mut self, apply: &mut dyn FnMut(&mut Preferences)) -> Result<()> {
        apply(&mut self.data.preferences);
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ViewStyle;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferences::new(dir.path().join("preferences.json")).unwrap();
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn update_persists_and_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonPreferences::new(path.clone()).unwrap();
        store
            .update(&mut |prefs| {
                prefs.dark_mode = false;
                prefs.view_mode = ViewStyle::Card;
            })
            .unwrap();

        let reopened = JsonPreferences::new(path).unwrap();
        let prefs = reopened.load();
        assert!(!prefs.dark_mode);
        assert!(prefs.paginated);
        assert_eq!(prefs.view_mode, ViewStyle::Card);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonPreferences::new(path).unwrap();
        assert_eq!(store.load(), Preferences::default());
    }

    #[test]
    fn no_temp_file_left_behind_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonPreferences::new(path.clone()).unwrap();
        store.update(&mut |prefs| prefs.paginated = false).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
