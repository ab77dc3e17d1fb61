//! Persistence collaborator: an opaque key-value store of JSON blobs.
//!
//! The scoring core never touches storage directly; services read a blob,
//! transform it in memory, and write it back. Absent or malformed blobs
//! decode to defaults rather than surfacing an error.

pub mod file;
pub mod keys;
pub mod memory;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// Read and decode a blob, falling back to `T::default()` when the key is
/// absent, unreadable, or holds JSON that no longer matches the schema.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed blob");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "storage read failed");
            T::default()
        }
    }
}
