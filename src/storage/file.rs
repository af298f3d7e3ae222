//! File-Backed Storage
//!
//! Persists each value as one file under a per-table directory, named by
//! the key codec's encoded form. An optional read-through/write-through
//! cache can be layered on top.
//!
//! ## Cache Coherence
//! The cache is a performance-only mirror of durable state, never
//! authoritative. It is rebuilt from disk on every construction and:
//! - populated lazily on a read miss, eagerly on write
//! - updated only after a file write fully succeeds
//! - evicted only after a file removal succeeds
//! - cleared only after every file in the directory has been deleted
//!
//! ## Concurrency
//! Cache access is internally synchronized, but the disk write and the
//! cache update are not atomic as a pair: a concurrent reader may observe
//! the pre-write cached value during a `put`. Accepted limitation; the
//! table directory is assumed to be owned by a single process.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{decode_key, encode_key, StorageKey};
use crate::error::{Result, ShelfError};

use super::Storage;

/// Persistent backend with one file per key
///
/// ## Operating Modes
/// Cache-enabled or cache-disabled, fixed at construction for the
/// instance's lifetime. Enabling the cache triggers an eager full-directory
/// preload (linear in stored entries, paid once at startup). Switching
/// modes means constructing a new instance over the same directory.
#[derive(Debug)]
pub struct FileStorage<K, V> {
    /// Name of the table this backend persists
    table_name: String,

    /// `{root}/{table_name}`, the directory holding one file per key
    table_dir: PathBuf,

    /// Whether the in-memory mirror is maintained
    cache_enabled: bool,

    /// In-memory mirror of durable entries (unused when disabled)
    cache: RwLock<HashMap<K, V>>,
}

impl<K, V> FileStorage<K, V>
where
    K: StorageKey,
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Open a file-backed table under the given root directory
    ///
    /// Creates `{root}/{table_name}` recursively if absent. A directory
    /// that cannot be created is logged and tolerated here; the backend
    /// then fails on first use instead of at construction. With caching
    /// enabled, every existing entry is loaded eagerly and a preload
    /// failure (unreadable or undecodable entry) is surfaced.
    pub fn open(table_name: &str, root: &Path, cache_enabled: bool) -> Result<Self> {
        let storage = Self {
            table_name: table_name.to_string(),
            table_dir: root.join(table_name),
            cache_enabled,
            cache: RwLock::new(HashMap::new()),
        };

        if let Err(e) = fs::create_dir_all(&storage.table_dir) {
            tracing::error!(
                table = %storage.table_name,
                error = %e,
                "failed to create table directory"
            );
        }

        if storage.cache_enabled {
            storage.preload_cache()?;
        }

        Ok(storage)
    }

    /// Get the table name
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Get the table's directory path
    pub fn table_dir(&self) -> &Path {
        &self.table_dir
    }

    /// Whether this instance maintains a cache
    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    /// Number of cache-resident entries (for testing/debugging)
    pub fn cached_entry_count(&self) -> usize {
        self.cache.read().len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// File path for a key: `{table_dir}/{encoded_key}`
    fn file_path(&self, key: &K) -> PathBuf {
        self.table_dir.join(encode_key(key.as_key_str().as_ref()))
    }

    /// Create the table directory (and parents) if missing; idempotent
    fn ensure_table_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.table_dir)?;
        Ok(())
    }

    /// Load every existing entry into the cache
    ///
    /// A full table scan: list the directory, then route each key through
    /// `get`, which populates the cache on the miss.
    fn preload_cache(&self) -> Result<()> {
        let keys = self.keys()?;
        for key in &keys {
            self.get(key)?;
        }

        tracing::debug!(
            table = %self.table_name,
            entries = keys.len(),
            "cache preloaded from disk"
        );
        Ok(())
    }

    /// Deserialize a value file's contents
    ///
    /// A file that exists but cannot be decoded is an error, not an
    /// absent entry.
    fn read_value(&self, path: &Path) -> Result<V> {
        let bytes = fs::read(path)?;
        bincode::deserialize(&bytes).map_err(|e| {
            ShelfError::Deserialization(format!(
                "table '{}': undecodable entry at {}: {}",
                self.table_name,
                path.display(),
                e
            ))
        })
    }
}

impl<K, V> Storage<K, V> for FileStorage<K, V>
where
    K: StorageKey,
    V: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// Get a value by key
    ///
    /// Search order: cache (if enabled), then the key's file. A disk hit
    /// populates the cache so the next read skips the filesystem.
    fn get(&self, key: &K) -> Result<Option<V>> {
        if self.cache_enabled {
            if let Some(value) = self.cache.read().get(key) {
                return Ok(Some(value.clone()));
            }
        }

        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let value = self.read_value(&path)?;
        if self.cache_enabled {
            self.cache.write().insert(key.clone(), value.clone());
        }
        Ok(Some(value))
    }

    /// Insert or overwrite the value for a key
    ///
    /// The cache is updated only after the file write has fully succeeded,
    /// so a failed write never leaves the cache ahead of disk.
    fn put(&self, key: K, value: V) -> Result<()> {
        let bytes = bincode::serialize(&value)
            .map_err(|e| ShelfError::Serialization(e.to_string()))?;

        self.ensure_table_dir()?;
        fs::write(self.file_path(&key), &bytes)?;

        if self.cache_enabled {
            self.cache.write().insert(key, value);
        }
        Ok(())
    }

    /// Remove a key's file if present
    ///
    /// Eviction from the cache happens only on a successful removal; an
    /// absent file is `Ok(false)`, not an error.
    fn delete(&self, key: &K) -> Result<bool> {
        match fs::remove_file(self.file_path(key)) {
            Ok(()) => {
                if self.cache_enabled {
                    self.cache.write().remove(key);
                }
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// List all stored keys by decoding the directory's filenames
    ///
    /// A missing directory means a table with no prior writes: empty, not
    /// an error. Subdirectories are skipped; a filename that is not a
    /// valid encoded key surfaces as `KeyCodec`.
    fn keys(&self) -> Result<Vec<K>> {
        if !self.table_dir.exists() {
            tracing::warn!(
                table = %self.table_name,
                "table directory missing, treating as empty"
            );
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.table_dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let canonical = decode_key(&file_name.to_string_lossy())?;
            keys.push(K::from_key_str(&canonical)?);
        }
        Ok(keys)
    }

    /// Membership test
    ///
    /// In cache-enabled mode the cache alone decides: a file written to
    /// the directory from outside this process stays invisible until it
    /// is loaded. Cache-disabled mode checks the file path directly.
    fn exists(&self, key: &K) -> Result<bool> {
        if self.cache_enabled {
            return Ok(self.cache.read().contains_key(key));
        }
        Ok(self.file_path(key).exists())
    }

    /// Delete every file in the table directory
    ///
    /// The first failed deletion aborts the rest and surfaces the error;
    /// entries already deleted stay deleted (no rollback), leaving the
    /// directory in a partial state. The cache is cleared only after all
    /// deletions succeed.
    fn clear(&self) -> Result<()> {
        if self.table_dir.exists() {
            for entry in fs::read_dir(&self.table_dir)? {
                let entry = entry?;
                let path = entry.path();
                fs::remove_file(&path).map_err(|e| {
                    ShelfError::Storage(format!(
                        "clear aborted for table '{}': failed to delete {}: {}",
                        self.table_name,
                        path.display(),
                        e
                    ))
                })?;
            }
        }

        if self.cache_enabled {
            self.cache.write().clear();
        }
        Ok(())
    }
}
