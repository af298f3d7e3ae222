//! Storage Module
//!
//! The storage contract and its backend implementations.
//!
//! ## Responsibilities
//! - Define the capability set every backend must implement
//! - Volatile in-memory backend (no persistence)
//! - Persistent file-backed backend with optional read cache
//!
//! ## Directory Layout (file backend)
//! ```text
//! {root_dir}/
//!   └── {table_name}/
//!         ├── <encoded_key>     (bincode-serialized value)
//!         ├── <encoded_key>
//!         └── ...
//! ```

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::error::Result;

/// The contract every storage backend implements
///
/// Backends are chosen once at table construction and never switched at
/// runtime. Missing keys are never errors: `get` returns `Ok(None)` and
/// `delete` returns `Ok(false)`. I/O and decode failures propagate to the
/// caller of the triggering operation.
pub trait Storage<K, V>: Send + Sync {
    /// Get the current value for a key, or `None` if absent
    fn get(&self, key: &K) -> Result<Option<V>>;

    /// Insert or overwrite the value for a key
    fn put(&self, key: K, value: V) -> Result<()>;

    /// Remove the entry if present; returns whether a removal occurred
    fn delete(&self, key: &K) -> Result<bool>;

    /// All currently stored keys, unordered, snapshot at call time
    fn keys(&self) -> Result<Vec<K>>;

    /// Membership test; agrees with `get` absent concurrent mutation
    fn exists(&self, key: &K) -> Result<bool>;

    /// Remove all entries; afterwards `keys()` is empty
    fn clear(&self) -> Result<()>;
}
