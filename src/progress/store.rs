// ABOUTME: Synchronous key-value persistence capability with memory and JSON-file backends
// ABOUTME: String values keyed by string, plus typed JSON helpers layered on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Client-local string storage
///
/// Keys and values are plain strings; structured values are stored as JSON
/// through [`KeyValueStoreExt`].
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove `key`; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Typed JSON access for any [`KeyValueStore`]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Deserialize the JSON stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is not valid
    /// JSON for `T`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        self.get(key)?
            .map(|raw| {
                serde_json::from_str(&raw).map_err(|e| {
                    AppError::serialization(format!("Stored value for '{key}' is invalid: {e}"))
                })
            })
            .transpose()
    }

    /// Serialize `value` as JSON under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::serialization(format!("Failed to encode '{key}': {e}")))?;
        self.set(key, raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

fn lock<T>(mutex: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::storage("Store lock poisoned"))
}

/// Process-local store, used by tests and short-lived sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> AppResult<()> {
        lock(&self.entries)?.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

/// Store persisted as one JSON object in a file
///
/// The whole map is rewritten on every change. A missing file reads as an
/// empty store and is created on the first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or prepare to create) the store at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON
    /// object of strings.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!("Store file {} is corrupt: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read store file {}: {e}",
                    path.display()
                ))
                .with_source(e))
            }
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened file store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Default location: `<data_dir>/fitmind/store.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn default_path() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("fitmind").join("store.json"))
            .ok_or_else(|| AppError::config("No platform data directory available"))
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::serialization(format!("Failed to encode store: {e}")))?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", self.path.display()))
                .with_source(e)
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut entries = lock(&self.entries)?;
        entries.insert(key.to_owned(), value);
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = lock(&self.entries)?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip_and_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("k", "v".to_owned()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::open(&path).unwrap();
        store.set_json("numbers", &vec![1, 2, 3]).unwrap();
        store.set("plain", "text".to_owned()).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        let numbers: Option<Vec<u32>> = reopened.get_json("numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
        assert_eq!(reopened.get("plain").unwrap().as_deref(), Some("text"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "[not an object").unwrap();
        assert!(FileStore::open(&path).is_err());
    }

    #[test]
    fn test_invalid_stored_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("n", "not json".to_owned()).unwrap();
        assert!(store.get_json::<u32>("n").is_err());
    }
}
