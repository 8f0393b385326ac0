//! Key-value slots with automatic JSON serialization.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use crate::StorageError;

/// A durable key-value store.
///
/// Values are opaque byte slices at this level; the provided [`get`](KeyValue::get)
/// and [`set`](KeyValue::set) methods layer JSON serialization on top so callers
/// work with typed values. Writes are last-write-wins; there is no partial-write
/// recovery beyond that.
pub trait KeyValue: Send + Sync {
    /// Read the raw bytes stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store raw bytes under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether a value exists under `key`.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get_raw(key)? {
            Some(bytes) => {
                let value = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes)
    }
}

impl<T: KeyValue + ?Sized> KeyValue for &T {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        (**self).exists(key)
    }
}

/// In-memory store, primarily for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.lock().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }
}
