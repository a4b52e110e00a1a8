//! Common test utilities for persistence integration tests.
//!
//! Every test gets its own SQLite file inside a temporary directory that is
//! removed when the returned [`TestDb`] is dropped.

#![allow(dead_code)]

use persistence::db::{create_pool, DatabaseConfig};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestDb {
    pub pool: SqlitePool,
    pub dir: TempDir,
}

impl TestDb {
    pub fn config(&self) -> DatabaseConfig {
        database_config(&self.dir)
    }
}

pub fn database_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        path: dir.path().join("portfolio.db"),
        max_connections: 5,
        connect_timeout_secs: 5,
    }
}

/// Create a pool on a fresh, empty database file.
pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = create_pool(&database_config(&dir))
        .await
        .expect("Failed to open test database");
    TestDb { pool, dir }
}

/// Create a pool with the schema in place but no rows.
pub async fn create_empty_schema_db() -> TestDb {
    let db = create_test_db().await;
    persistence::schema::ensure_schema(&db.pool)
        .await
        .expect("Failed to create schema");
    db
}

pub async fn table_names(pool: &SqlitePool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .expect("Failed to list tables")
}

pub async fn row_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
