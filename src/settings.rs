use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Storage key the audio settings blob lives under
pub const SETTINGS_KEY: &str = "settings";

/// Persisted audio settings
///
/// Read on every playback decision and written back on every change. The
/// persisted document nests these under an `audio` object; a legacy flat
/// schema is accepted on read and migrated forward on the next save.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub sound_enabled: bool,
    pub music_enabled: bool,

    /// Sound-effect volume (0.0-1.0)
    pub sound_volume: f32,

    /// Music volume (0.0-1.0)
    pub music_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
            sound_volume: 0.7,
            music_volume: 0.5,
        }
    }
}

/// Current on-disk settings document: `{ "audio": { ... } }`
#[derive(Debug, Serialize, Deserialize)]
struct SettingsDoc {
    audio: AudioSettings,
}

impl AudioSettings {
    /// Load settings from a store, falling back to defaults when the key is
    /// absent or unreadable. Accepts the legacy flat schema
    /// `{soundEnabled, musicEnabled, soundVolume, musicVolume}` as a
    /// fallback; the next `save` writes the nested schema.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let raw = match store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("No persisted settings, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings, using defaults: {}", e);
                return Self::default();
            }
        };

        if let Ok(doc) = serde_json::from_str::<SettingsDoc>(&raw) {
            return doc.audio.clamped();
        }

        // Legacy flat schema from older installs
        match serde_json::from_str::<AudioSettings>(&raw) {
            Ok(flat) => {
                tracing::info!("Migrating legacy flat settings schema");
                flat.clamped()
            }
            Err(e) => {
                tracing::warn!("Unrecognized settings payload, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Persist the nested schema under the settings key
    pub fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        let doc = SettingsDoc { audio: *self };
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| SettingsError::Invalid(e.to_string()))?;
        store.set(SETTINGS_KEY, &json)
    }

    fn clamped(mut self) -> Self {
        self.sound_volume = self.sound_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}

/// Key-value persistence adapter
///
/// The durable store itself is an external collaborator; the scheduler only
/// needs get/set of a string blob under a key.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// File-backed store writing one JSON file per key
pub struct FileSettingsStore {
    dir: PathBuf,
}

impl FileSettingsStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted in the platform config directory
    pub fn in_config_dir(app_name: &str) -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join(app_name))
            .unwrap_or_else(|| PathBuf::from(app_name));
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| SettingsError::ReadFailed {
                key: key.to_string(),
                source: Box::new(e),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.dir).map_err(|e| SettingsError::WriteFailed {
            key: key.to_string(),
            source: Box::new(e),
        })?;
        fs::write(self.path_for(key), value).map_err(|e| SettingsError::WriteFailed {
            key: key.to_string(),
            source: Box::new(e),
        })
    }
}

/// In-memory store for tests and hosts that persist elsewhere
#[derive(Default)]
pub struct MemorySettingsStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
