//! Service repository for database operations.

use sqlx::{Executor, Sqlite, SqlitePool};

use domain::models::NewService;

use crate::entities::ServiceEntity;
use crate::metrics::{timed, Operation};

const TABLE: &str = "services";

/// Repository for service-related database operations.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    /// Creates a new ServiceRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all services in insertion order.
    pub async fn list_all(&self) -> Result<Vec<ServiceEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::List,
            sqlx::query_as::<_, ServiceEntity>(
                r#"
                SELECT * FROM services ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a service by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ServiceEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::FindById,
            sqlx::query_as::<_, ServiceEntity>(
                r#"
                SELECT * FROM services WHERE id = ?1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Insert a service.
    pub async fn create(&self, service: &NewService) -> Result<ServiceEntity, sqlx::Error> {
        timed(TABLE, Operation::Create, insert(&self.pool, service)).await
    }

    /// Count stored services.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(TABLE, Operation::Count, count(&self.pool)).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, service: &NewService) -> Result<ServiceEntity, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ServiceEntity>(
        r#"
        INSERT INTO services (title, description, icon, price_range)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING *
        "#,
    )
    .bind(&service.title)
    .bind(&service.description)
    .bind(&service.icon)
    .bind(&service.price_range)
    .fetch_one(executor)
    .await
}

pub(crate) async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
        .fetch_one(executor)
        .await?;
    Ok(count.0)
}
