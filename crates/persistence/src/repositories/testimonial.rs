//! Testimonial repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use domain::models::NewTestimonial;

use crate::entities::TestimonialEntity;
use crate::metrics::{timed, Operation};

const TABLE: &str = "testimonials";

/// Repository for testimonial-related database operations.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: SqlitePool,
}

impl TestimonialRepository {
    /// Creates a new TestimonialRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List approved testimonials, newest first.
    pub async fn list_approved(&self) -> Result<Vec<TestimonialEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::List,
            sqlx::query_as::<_, TestimonialEntity>(
                r#"
                SELECT * FROM testimonials
                WHERE approved = 1
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a testimonial by id, approved or not.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<TestimonialEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::FindById,
            sqlx::query_as::<_, TestimonialEntity>(
                r#"
                SELECT * FROM testimonials WHERE id = ?1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Insert a testimonial. It is always stored as approved.
    pub async fn create(
        &self,
        testimonial: &NewTestimonial,
    ) -> Result<TestimonialEntity, sqlx::Error> {
        timed(TABLE, Operation::Create, insert(&self.pool, testimonial, Utc::now())).await
    }

    /// Count stored testimonials.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(TABLE, Operation::Count, count(&self.pool)).await
    }
}

pub(crate) async fn insert<'e, E>(
    executor: E,
    testimonial: &NewTestimonial,
    created_at: DateTime<Utc>,
) -> Result<TestimonialEntity, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, TestimonialEntity>(
        r#"
        INSERT INTO testimonials (name, role, rating, feedback, approved, created_at)
        VALUES (?1, ?2, ?3, ?4, 1, ?5)
        RETURNING *
        "#,
    )
    .bind(&testimonial.name)
    .bind(&testimonial.role)
    .bind(testimonial.rating)
    .bind(&testimonial.feedback)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM testimonials")
        .fetch_one(executor)
        .await?;
    Ok(count.0)
}
