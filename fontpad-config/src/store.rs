//! Settings persistence backends.
//!
//! Covers:
//! - the `SettingsStore` trait the editor controller is injected with
//! - `FileSettingsStore`: JSON file under the XDG config directory, atomic
//!   temp-file + rename writes
//! - `MemorySettingsStore`: test double holding the raw record in memory

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

use crate::settings::{self, Settings};

/// Errors from a settings save. Loads never fail (defaults are substituted),
/// so only the write path carries an error type.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage for the persisted editor settings.
///
/// Injected into the controller so tests can substitute the in-memory
/// backend for the file-backed one.
pub trait SettingsStore {
    /// Load the persisted settings, substituting defaults for anything
    /// missing or malformed.
    fn load(&self) -> Settings;

    /// Write the whole three-entry record. Last write wins.
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn load(&self) -> Settings {
        (**self).load()
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        (**self).save(settings)
    }
}

/// File-backed settings store.
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Store at the default per-user location.
    pub fn new() -> Self {
        Self {
            path: Self::settings_path(),
        }
    }

    /// Store at an explicit path (CLI override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("fontpad").join("settings.json")
            } else {
                PathBuf::from("settings.json")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/fontpad/settings.json
            if let Some(home_dir) = dirs::home_dir() {
                home_dir
                    .join(".config")
                    .join("fontpad")
                    .join("settings.json")
            } else {
                // Fallback if home directory cannot be determined
                PathBuf::from("settings.json")
            }
        }
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        if !self.path.exists() {
            log::info!(
                "Settings file not found at {:?}, using defaults",
                self.path
            );
            return Settings::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(body) => settings::decode(&body),
            Err(e) => {
                log::warn!("Failed to read settings file {:?}: {e}", self.path);
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let body = settings::encode(settings)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &body)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

/// In-memory settings store for tests.
///
/// Holds the raw record body, so corruption scenarios exercise the same
/// decode path as the file store.
#[derive(Default)]
pub struct MemorySettingsStore {
    raw: Mutex<Option<String>>,
    save_count: Mutex<usize>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw record body (e.g. one with a corrupted entry).
    pub fn with_raw(body: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(body.into())),
            save_count: Mutex::new(0),
        }
    }

    /// Number of saves performed since construction.
    pub fn save_count(&self) -> usize {
        *self.save_count.lock()
    }

    /// The raw record body as last saved, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        match self.raw.lock().as_deref() {
            Some(body) => settings::decode(body),
            None => Settings::default(),
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let body = settings::encode(settings)?;
        *self.raw.lock() = Some(body);
        *self.save_count.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontpad_catalog::Variant;

    #[test]
    fn test_file_store_load_without_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("settings.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("settings.json"));

        let settings = Settings {
            font: "Roboto".to_string(),
            variant: Variant::new(700, true),
            content: "persisted text".to_string(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("nested").join("settings.json"));
        store.save(&Settings::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let store = FileSettingsStore::with_path(path.clone());
        store.save(&Settings::default()).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_tolerates_corrupt_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"font": "Lato", "variant": "{{broken", "content": "kept"}"#,
        )
        .unwrap();

        let store = FileSettingsStore::with_path(path);
        let settings = store.load();
        assert_eq!(settings.font, "Lato");
        assert_eq!(settings.variant, Variant::default());
        assert_eq!(settings.content, "kept");
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.save_count(), 0);
        store.save(&Settings::default()).unwrap();
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.load(), Settings::default());
    }
}
