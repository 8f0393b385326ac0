//! File-backed store: one JSON document per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{KeyValue, StorageError};

/// Key-value store persisted as files under a root directory.
///
/// Each key maps to `<root>/<key>.json`. A write replaces the whole file, so
/// concurrent writers resolve to whichever write lands last.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::Open(e.to_string()))?;
        Ok(Self { root })
    }

    /// The directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValue for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| {
            tracing::warn!(key, error = %e, "file store write failed");
            StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
