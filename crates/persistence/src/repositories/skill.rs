//! Skill repository for database operations.

use sqlx::{Executor, Sqlite, SqlitePool};

use domain::models::NewSkill;

use crate::entities::SkillEntity;
use crate::metrics::{timed, Operation};

const TABLE: &str = "skills";

/// Repository for skill-related database operations.
#[derive(Clone)]
pub struct SkillRepository {
    pool: SqlitePool,
}

impl SkillRepository {
    /// Creates a new SkillRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all skills, strongest first.
    pub async fn list_all(&self) -> Result<Vec<SkillEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::List,
            sqlx::query_as::<_, SkillEntity>(
                r#"
                SELECT * FROM skills
                ORDER BY percentage DESC, id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a skill by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<SkillEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::FindById,
            sqlx::query_as::<_, SkillEntity>(
                r#"
                SELECT * FROM skills WHERE id = ?1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Insert a skill. The percentage is stored as given.
    pub async fn create(&self, skill: &NewSkill) -> Result<SkillEntity, sqlx::Error> {
        timed(TABLE, Operation::Create, insert(&self.pool, skill)).await
    }

    /// Count stored skills.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(TABLE, Operation::Count, count(&self.pool)).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, skill: &NewSkill) -> Result<SkillEntity, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, SkillEntity>(
        r#"
        INSERT INTO skills (name, percentage, category)
        VALUES (?1, ?2, ?3)
        RETURNING *
        "#,
    )
    .bind(&skill.name)
    .bind(skill.percentage)
    .bind(&skill.category)
    .fetch_one(executor)
    .await
}

pub(crate) async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skills")
        .fetch_one(executor)
        .await?;
    Ok(count.0)
}
