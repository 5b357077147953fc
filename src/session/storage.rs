//! Persistent key-value backends for the session.

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Client-local storage surviving restarts (browser `localStorage`, a file)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Volatile store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use super::*;
    use std::path::{Path, PathBuf};

    /// JSON object on disk, rewritten on every change
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<HashMap<String, String>, StorageError> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
                Ok(content) => Ok(serde_json::from_str(&content)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
                Err(e) => Err(StorageError::Io(e.to_string())),
            }
        }

        fn write_all(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
            let content = serde_json::to_string_pretty(entries)?;
            std::fs::write(&self.path, content).map_err(|e| StorageError::Io(e.to_string()))
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            match self.read_all() {
                Ok(entries) => entries.get(key).cloned(),
                Err(e) => {
                    tracing::warn!(path = ?self.path, error = %e, "Unreadable session file");
                    None
                }
            }
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all().unwrap_or_default();
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let mut entries = self.read_all().unwrap_or_default();
            if entries.remove(key).is_some() {
                self.write_all(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.remove("token").unwrap();
        assert!(store.get("token").is_none());
        assert!(store.is_empty());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::new(&path);
        store.set("token", "abc").unwrap();
        store.set("user", r#"{"id":1}"#).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("token").as_deref(), Some("abc"));

        reopened.remove("token").unwrap();
        assert!(store.get("token").is_none());
        assert_eq!(store.get("user").as_deref(), Some(r#"{"id":1}"#));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("token").is_none());
        store.set("token", "fresh").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("fresh"));
    }
}
