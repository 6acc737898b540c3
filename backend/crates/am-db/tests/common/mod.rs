#![allow(dead_code)]

use am_core::ProfileFields;
use am_db::{JsonFileProfileStore, ProfileRepository, SqliteProfileStore};

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool (no schema)
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Creates an initialized SQLite store on an in-memory database
pub async fn create_sqlite_store() -> SqliteProfileStore {
    let store = SqliteProfileStore::new(create_test_pool().await);
    am_db::ProfileStore::initialize(&store)
        .await
        .expect("Failed to initialize store");
    store
}

/// Creates a JSON file store inside a fresh temp dir (not initialized)
pub fn create_json_store() -> (TempDir, JsonFileProfileStore) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = JsonFileProfileStore::new(temp.path().join("data").join("aboutme.json"));
    (temp, store)
}

/// Repository over an initialized in-memory SQLite store
pub async fn create_sqlite_repository() -> ProfileRepository {
    ProfileRepository::new(Arc::new(create_sqlite_store().await))
}

pub fn alice_fields() -> ProfileFields {
    ProfileFields {
        name: "Alice".to_string(),
        aboutme_001: "Engineer".to_string(),
        goals_001: "Learn Go".to_string(),
        ..ProfileFields::default()
    }
}
