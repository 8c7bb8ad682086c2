//! Position persistence stores
//!
//! A [`PositionStore`] is a string key-value store that survives restarts.
//! Every operation may fail (storage disabled, unreadable file, ...); callers
//! decide what a failure means. The player treats all of them as
//! best-effort and keeps playing without persistence.

mod error;
mod json_file;
mod memory;

pub use error::StoreError;
pub use json_file::{JsonFileStore, StoredEntry};
pub use memory::{DisabledStore, MemoryStore};

/// String key-value storage for playback positions.
pub trait PositionStore {
    /// Read the value stored under `key`, `Ok(None)` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: PositionStore + ?Sized> PositionStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
