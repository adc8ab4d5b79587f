//! Durable key-value storage boundary.
//!
//! The state layer persists exactly one value (the dark-mode flag), so the
//! interface is a minimal string-to-string store. Tests and embedders use
//! [`MemoryStore`]; the CLI uses [`FileStore`] so the flag survives
//! invocations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

/// Storage loading errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A durable string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_owned(), value.to_owned());
    }
}

/// File-backed store: a flat JSON object on disk.
///
/// The file is read once at open and rewritten on every `set`. Write
/// failures are logged and otherwise ignored - nothing in this layer is
/// fatal.
pub struct FileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a store at the given path, loading any existing contents.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).map_err(|e| StorageError::Io(e.to_string()))?;
            serde_json::from_str(&contents).map_err(|e| StorageError::Parse(e.to_string()))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    fn persist(&self, values: &HashMap<String, String>) {
        if let Err(e) = self.try_persist(values) {
            warn!(path = %self.path.display(), "failed to persist storage: {e}");
        }
    }

    fn try_persist(&self, values: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
        }
        let json =
            serde_json::to_string_pretty(values).map_err(|e| StorageError::Parse(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::Io(e.to_string()))
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.lock();
        values.insert(key.to_owned(), value.to_owned());
        self.persist(&values);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("dark_mode"), None);

        store.set("dark_mode", "true");
        assert_eq!(store.get("dark_mode"), Some("true".to_string()));

        store.set("dark_mode", "false");
        assert_eq!(store.get("dark_mode"), Some("false".to_string()));
    }

    #[test]
    fn test_memory_store_seeded() {
        let store = MemoryStore::with_entries([("dark_mode", "true")]);
        assert_eq!(store.get("dark_mode"), Some("true".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("dark_mode"), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let store = FileStore::open(&path).unwrap();
        store.set("dark_mode", "true");
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("dark_mode"), Some("true".to_string()));
    }

    #[test]
    fn test_file_store_rejects_corrupt_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(StorageError::Parse(_))
        ));
    }
}
