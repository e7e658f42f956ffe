use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::KeyValueStore;
use crate::error::StorageError;

/// A store persisted as one JSON object of string values on local disk.
///
/// Every write rewrites the whole file through a temp file and rename, so a
/// crash mid-write leaves the previous contents intact. A missing file is an
/// empty store; a file that is not valid JSON fails reads and is replaced by
/// the next write.
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

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Current entries for a read-modify-write. A corrupt file is replaced
    /// rather than blocking every later write.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(StorageError::Corrupt { path, message }) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %message,
                    "store file is corrupt, replacing it"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_vec_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "store flushed to disk");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.load() {
            Ok(mut entries) => {
                if entries.remove(key).is_some() {
                    self.flush(&entries)?;
                }
                Ok(())
            }
            // Nothing trustworthy to keep, so the key is gone either way.
            Err(StorageError::Corrupt { .. }) => self.flush(&BTreeMap::new()),
            Err(e) => Err(e),
        }
    }
}
