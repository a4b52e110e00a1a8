//! Table definitions.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so [`ensure_schema`] can run
//! on every process start, including cold starts on ephemeral storage.

use sqlx::SqlitePool;
use tracing::debug;

/// Table names, in creation order.
pub const TABLES: [&str; 4] = ["projects", "services", "skills", "testimonials"];

const CREATE_PROJECTS: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    tech_stack TEXT NOT NULL,
    github_link TEXT,
    live_link TEXT,
    image TEXT,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const CREATE_SERVICES: &str = r#"
CREATE TABLE IF NOT EXISTS services (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    icon TEXT NOT NULL DEFAULT 'bi-code-slash',
    price_range TEXT
)
"#;

const CREATE_SKILLS: &str = r#"
CREATE TABLE IF NOT EXISTS skills (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    percentage INTEGER NOT NULL DEFAULT 50,
    category TEXT NOT NULL DEFAULT 'Technical'
)
"#;

const CREATE_TESTIMONIALS: &str = r#"
CREATE TABLE IF NOT EXISTS testimonials (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT NOT NULL DEFAULT '',
    rating INTEGER NOT NULL DEFAULT 5,
    feedback TEXT NOT NULL,
    approved BOOLEAN NOT NULL DEFAULT 1,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Creates any missing table. Existing tables and rows are left untouched.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (table, ddl) in TABLES.iter().zip([
        CREATE_PROJECTS,
        CREATE_SERVICES,
        CREATE_SKILLS,
        CREATE_TESTIMONIALS,
    ]) {
        debug!(table = %table, "Ensuring table exists");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }

    tx.commit().await
}
