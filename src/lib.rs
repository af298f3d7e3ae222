//! # ShelfDB
//!
//! An embedded, table-oriented key-value store with:
//! - A uniform storage contract over interchangeable backends
//! - Volatile in-memory backend
//! - Persistent file-backed backend with optional read cache
//! - Filesystem-safe key encoding (reversible, collision-free)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Database                              │
//! │                  (Config → Backends)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Table<K, V>                             │
//! │                 (Named Delegation)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  InMemory   │          │    File     │
//!   │  (RwLock)   │          │ (+ Cache)   │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                        {root}/{table}/{encoded_key}
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod storage;
pub mod table;
pub mod database;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::{Config, StorageMode};
pub use codec::StorageKey;
pub use storage::{FileStorage, InMemoryStorage, Storage};
pub use table::Table;
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShelfDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
