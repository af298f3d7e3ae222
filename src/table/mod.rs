//! Table Module
//!
//! A named binding of a storage backend: the unit of access presented to
//! callers. Every operation is a verbatim delegation to the bound backend
//! with no additional logic, locking, or validation.

use crate::error::Result;
use crate::storage::Storage;

/// A named table over exactly one backend instance
///
/// The backend is bound at construction for the table's lifetime and never
/// switched at runtime. The table owns no data of its own.
pub struct Table<K, V> {
    /// Table name (also the directory name for file-backed tables)
    name: String,

    /// The bound backend
    storage: Box<dyn Storage<K, V>>,
}

impl<K, V> Table<K, V> {
    /// Bind a name to a backend
    pub fn new(name: impl Into<String>, storage: Box<dyn Storage<K, V>>) -> Self {
        Self {
            name: name.into(),
            storage,
        }
    }

    /// Get the bound name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current value for a key, or `None` if absent
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        self.storage.get(key)
    }

    /// Insert or overwrite the value for a key
    pub fn put(&self, key: K, value: V) -> Result<()> {
        self.storage.put(key, value)
    }

    /// Remove the entry if present; returns whether a removal occurred
    pub fn delete(&self, key: &K) -> Result<bool> {
        self.storage.delete(key)
    }

    /// All currently stored keys, unordered
    pub fn keys(&self) -> Result<Vec<K>> {
        self.storage.keys()
    }

    /// Membership test
    pub fn exists(&self, key: &K) -> Result<bool> {
        self.storage.exists(key)
    }

    /// Remove all entries
    pub fn clear(&self) -> Result<()> {
        self.storage.clear()
    }
}
