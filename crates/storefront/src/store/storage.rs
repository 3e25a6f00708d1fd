//! Durable snapshot storage.
//!
//! The stores persist a full serialized snapshot under a fixed string key
//! after every mutation and read it back once at session start. A missing or
//! malformed value is treated as "no prior state", never as an error; write
//! failures are logged and swallowed by the callers, leaving the in-memory
//! state authoritative for the session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Storage key for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart-storage";
/// Storage key for the user/address snapshot.
pub const USER_STORAGE_KEY: &str = "user-storage";

/// Errors from the snapshot storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A key-value string store for full-state snapshots.
///
/// This is the local-storage analog: one value per fixed key, written
/// wholesale, read once at rehydration.
pub trait SnapshotStorage: Send + Sync {
    /// Read the stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be read at all; an absent
    /// value is `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be written.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed storage: one JSON file per key under a data directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed constants, but keep them filename-safe anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// The directory snapshots are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Write through a temp file so a crash mid-write can't leave a
        // truncated snapshot; a torn snapshot would otherwise be read back
        // as "malformed" and silently reset the state.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
