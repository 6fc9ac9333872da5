//! Storage error type.

use std::path::PathBuf;

/// Failure of a [`super::KeyValueStore`] operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key maps to no usable file name (empty after sanitizing).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    /// Reading, writing or removing the backing file failed.
    #[error("storage I/O at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The temp file could not be moved over the target.
    #[error("could not persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}
