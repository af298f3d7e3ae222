//! In-Memory Storage
//!
//! HashMap-based backend with RwLock for concurrency. No persistence:
//! cleared or dropped state is unrecoverable.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::error::Result;

use super::Storage;

/// Volatile backend backed by a hash map
///
/// Safe for concurrent use from multiple threads; the lock gives
/// per-operation atomicity only. Check-then-act sequences across calls
/// can still race and are the caller's responsibility.
pub struct InMemoryStorage<K, V> {
    store: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStorage<K, V> {
    /// Create a new empty backend
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored (for testing/debugging)
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Whether the backend holds no entries
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}

impl<K, V> Default for InMemoryStorage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Storage<K, V> for InMemoryStorage<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Result<Option<V>> {
        Ok(self.store.read().get(key).cloned())
    }

    fn put(&self, key: K, value: V) -> Result<()> {
        self.store.write().insert(key, value);
        Ok(())
    }

    fn delete(&self, key: &K) -> Result<bool> {
        Ok(self.store.write().remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<K>> {
        Ok(self.store.read().keys().cloned().collect())
    }

    fn exists(&self, key: &K) -> Result<bool> {
        Ok(self.store.read().contains_key(key))
    }

    fn clear(&self) -> Result<()> {
        self.store.write().clear();
        Ok(())
    }
}
