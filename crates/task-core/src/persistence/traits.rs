//! Persistence Layer - Core Traits
//!
//! Abstract durable key-value storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::error::StorageError;

/// Durable string key-value store
pub trait KeyValueStore {
    /// Read a key; `Ok(None)` when it was never written
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
