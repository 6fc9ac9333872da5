//! Durable key-value storage boundary.
//!
//! The history store persists through [`KeyValueStore`] so the same logic runs
//! against the on-disk [`FileStore`] and the in-process [`MemoryStore`].

mod error;
mod file;
mod key;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use key::file_name_for_key;
pub use memory::MemoryStore;

/// String key-value storage with `get`/`set`/`remove` semantics.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
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
