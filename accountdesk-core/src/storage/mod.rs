//! Persistence for the account list
//!
//! The account list lives under a single key of a synchronous string
//! key-value store. [`KeyValueStore`] abstracts the backend; [`FileStore`]
//! and [`MemoryStore`] are the bundled implementations and
//! [`AccountGateway`] handles (de)serialization of the list.

mod file;
mod gateway;
mod memory;

pub use file::FileStore;
pub use gateway::{ACCOUNTS_KEY, AccountGateway};
pub use memory::MemoryStore;

use crate::error::StorageResult;

/// Synchronous string key-value store
///
/// Backends report failures (quota, unavailable medium, I/O) as errors;
/// callers decide whether to degrade gracefully.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
