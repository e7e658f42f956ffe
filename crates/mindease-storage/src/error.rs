use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("quota exceeded writing {key} ({needed} bytes needed, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store file {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}
