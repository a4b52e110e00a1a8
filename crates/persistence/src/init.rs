//! Startup initialization: schema first, then seed.

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;

use crate::schema::ensure_schema;
use crate::seed::{seed_if_empty, SeedReport};

/// Fatal startup failures. The host decides whether to abort.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    #[error("Failed to seed default content: {0}")]
    Seed(#[source] sqlx::Error),
}

/// Result of a successful initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub seeded: SeedReport,
}

/// Ensures the schema exists and seeds empty tables.
///
/// Safe to run on every cold start.
pub async fn initialize(pool: &SqlitePool) -> Result<InitReport, InitError> {
    ensure_schema(pool).await.map_err(InitError::Schema)?;
    let seeded = seed_if_empty(pool).await.map_err(InitError::Seed)?;

    info!(seeded_rows = seeded.total(), "Database initialized");

    Ok(InitReport { seeded })
}
