//! mindease-storage
//!
//! Local key-value persistence. A small storage port with in-memory and
//! file-backed implementations, plus the best-effort snapshot and opt-in
//! preference records built on top of it.

pub mod error;
pub mod file;
pub mod memory;
pub mod snapshot;

use crate::error::StorageError;

/// Capability to get, set and remove string values by key.
///
/// Implementations report failures as [`StorageError`]; the snapshot layer
/// decides which of those are swallowed.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
