//! Tests for Table
//!
//! These tests verify:
//! - Name binding
//! - Verbatim delegation to the bound backend
//! - Tables over both backend variants

use serde::{Deserialize, Serialize};
use shelfdb::{FileStorage, InMemoryStorage, Storage, Table};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
}

fn memory_table() -> Table<String, User> {
    Table::new("users", Box::new(InMemoryStorage::new()))
}

// =============================================================================
// Name Tests
// =============================================================================

#[test]
fn test_name_binding() {
    let table = memory_table();
    assert_eq!(table.name(), "users");
}

// =============================================================================
// Delegation Tests
// =============================================================================

#[test]
fn test_delegates_all_operations() {
    let table = memory_table();
    let ada = User {
        name: "Ada".to_string(),
    };

    table.put("user:1".to_string(), ada.clone()).unwrap();

    assert_eq!(table.get(&"user:1".to_string()).unwrap(), Some(ada));
    assert!(table.exists(&"user:1".to_string()).unwrap());
    assert_eq!(table.keys().unwrap(), vec!["user:1"]);

    assert!(table.delete(&"user:1".to_string()).unwrap());
    assert_eq!(table.get(&"user:1".to_string()).unwrap(), None);

    table.put("user:2".to_string(), User { name: "Grace".to_string() }).unwrap();
    table.clear().unwrap();
    assert!(table.keys().unwrap().is_empty());
}

#[test]
fn test_table_over_file_backend() {
    let temp = TempDir::new().unwrap();
    let storage: FileStorage<String, User> =
        FileStorage::open("users", temp.path(), true).unwrap();
    let table = Table::new("users", Box::new(storage) as Box<dyn Storage<String, User>>);

    let ada = User {
        name: "Ada".to_string(),
    };
    table.put("user:1".to_string(), ada.clone()).unwrap();

    // The backend, not the table, owns the on-disk layout
    assert!(temp.path().join("users").is_dir());
    assert_eq!(table.get(&"user:1".to_string()).unwrap(), Some(ada));
}

#[test]
fn test_tables_do_not_share_state() {
    let first = memory_table();
    let second = memory_table();

    first
        .put("user:1".to_string(), User { name: "Ada".to_string() })
        .unwrap();

    // Same name, different backend instance
    assert_eq!(second.name(), first.name());
    assert!(!second.exists(&"user:1".to_string()).unwrap());
}
