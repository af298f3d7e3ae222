//! Database Module
//!
//! The bootstrap object that turns configuration into tables.
//!
//! ## Responsibilities
//! - Hold the configuration chosen at startup
//! - Instantiate the backend the configured mode selects
//! - Hand out `Table`s bound to that backend
//!
//! The database itself stores nothing: every table owns its backend
//! exclusively, and the core only requires that whichever backend is
//! chosen satisfies the `Storage` contract.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::StorageKey;
use crate::config::{Config, StorageMode};
use crate::error::Result;
use crate::storage::{FileStorage, InMemoryStorage, Storage};
use crate::table::Table;

/// Entry point for constructing tables over a configured backend
pub struct Database {
    config: Config,
}

impl Database {
    /// Create a database from a config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Construct a table bound to the configured backend
    ///
    /// File mode opens (and eagerly preloads, when caching is enabled)
    /// the table's directory under the configured root; in-memory mode
    /// starts empty every time.
    pub fn table<K, V>(&self, name: &str) -> Result<Table<K, V>>
    where
        K: StorageKey + 'static,
        V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let storage: Box<dyn Storage<K, V>> = match self.config.mode {
            StorageMode::InMemory => Box::new(InMemoryStorage::new()),
            StorageMode::File { cache_enabled } => Box::new(FileStorage::open(
                name,
                &self.config.root_dir,
                cache_enabled,
            )?),
        };

        tracing::debug!(table = name, mode = ?self.config.mode, "table constructed");
        Ok(Table::new(name, storage))
    }
}
