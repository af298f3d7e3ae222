//! Configuration for ShelfDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a ShelfDB instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for file-backed tables
    /// Internal structure:
    ///   {root_dir}/
    ///     └── {table_name}/    (one file per key)
    pub root_dir: PathBuf,

    /// Which backend newly constructed tables use
    pub mode: StorageMode,
}

/// Backend selection for new tables
///
/// Fixed per table at construction; switching modes means constructing a
/// new table over the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Volatile hash-map backend, no persistence
    InMemory,

    /// One file per key under the configured root
    File {
        /// Maintain an in-memory read cache, eagerly preloaded at startup
        cache_enabled: bool,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("./shelfdb_data"),
            mode: StorageMode::InMemory,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory for file-backed tables
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    /// Set the storage mode directly
    pub fn mode(mut self, mode: StorageMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Select the volatile in-memory backend
    pub fn in_memory(mut self) -> Self {
        self.config.mode = StorageMode::InMemory;
        self
    }

    /// Select the file-backed backend, with or without a read cache
    pub fn file_backed(mut self, cache_enabled: bool) -> Self {
        self.config.mode = StorageMode::File { cache_enabled };
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
