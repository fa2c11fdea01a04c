// Best-effort persistence for the theme preference record. Failures here
// are logged and swallowed: theme application must never be blocked by a
// missing directory, a corrupt slot, or an environment without storage.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;

use crate::types::PreferenceRecord;

/// Storage slot name for the serialized preference record.
pub const STORAGE_KEY: &str = "theme-preferences";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable in this environment")]
    Unavailable,

    #[error("storage I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// A string-keyed slot store. Implementations are synchronous and cheap;
/// `get` answers `None` for an absent slot rather than erroring.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-per-key storage rooted at a directory, for desktop sessions.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

/// In-memory storage sharing one map across clones. Used by tests and by
/// hosts that want session-only preferences.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for environments with no persistence at all. Reads find nothing
/// and writes report `Unavailable`, which the adapter logs and drops.
pub struct NullStorage;

impl KeyValueStorage for NullStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// The persistence adapter: serializes the preference record into a single
/// storage slot and degrades to "no preference" on any failure.
pub struct Preferences {
    storage: Box<dyn KeyValueStorage>,
}

impl Preferences {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Reads the stored record. Absent, unparsable, or unavailable storage
    /// all answer `None`; a parse failure is logged, never surfaced.
    pub fn load(&self) -> Option<PreferenceRecord> {
        let raw = self.storage.get(STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Failed to parse stored theme preferences: {e}");
                None
            }
        }
    }

    /// Writes the record, logging and dropping the write on failure.
    pub fn save(&self, record: &PreferenceRecord) {
        let raw = match serde_json::to_string(record) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize theme preferences: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(STORAGE_KEY, &raw) {
            tracing::warn!("Failed to save theme preferences: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThemeMode;

    fn record(id: &str, mode: ThemeMode) -> PreferenceRecord {
        PreferenceRecord {
            current_theme_id: id.to_string(),
            mode,
        }
    }

    #[test]
    fn memory_round_trip() {
        let storage = MemoryStorage::new();
        let prefs = Preferences::new(Box::new(storage.clone()));
        assert!(prefs.load().is_none());

        prefs.save(&record("light", ThemeMode::Light));
        assert_eq!(prefs.load(), Some(record("light", ThemeMode::Light)));

        // A clone shares the same slots.
        let other = Preferences::new(Box::new(storage));
        assert_eq!(other.load(), Some(record("light", ThemeMode::Light)));
    }

    #[test]
    fn corrupt_slot_reads_as_no_preference() {
        let storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "{not json").unwrap();
        let prefs = Preferences::new(Box::new(storage));
        assert!(prefs.load().is_none());
    }

    #[test]
    fn null_storage_never_errors_out() {
        let prefs = Preferences::new(Box::new(NullStorage));
        assert!(prefs.load().is_none());
        // Write is dropped with a warning, not an error.
        prefs.save(&record("dark", ThemeMode::Dark));
        assert!(prefs.load().is_none());
    }

    #[test]
    fn file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::new(Box::new(FileStorage::new(dir.path())));
        prefs.save(&record("dark", ThemeMode::System));

        let reopened = Preferences::new(Box::new(FileStorage::new(dir.path())));
        assert_eq!(reopened.load(), Some(record("dark", ThemeMode::System)));
    }

    #[test]
    fn file_storage_reads_nothing_from_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("never-created");
        let prefs = Preferences::new(Box::new(FileStorage::new(missing)));
        assert!(prefs.load().is_none());
    }

    #[test]
    fn stored_slot_is_the_documented_json_shape() {
        let storage = MemoryStorage::new();
        let prefs = Preferences::new(Box::new(storage.clone()));
        prefs.save(&record("custom", ThemeMode::System));
        assert_eq!(
            storage.get(STORAGE_KEY).unwrap(),
            r#"{"currentThemeId":"custom","mode":"system"}"#
        );
    }
}
