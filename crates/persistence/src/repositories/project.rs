//! Project repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use domain::models::NewProject;

use crate::entities::ProjectEntity;
use crate::metrics::{timed, Operation};

const TABLE: &str = "projects";

/// Repository for project-related database operations.
#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    /// Creates a new ProjectRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all projects, newest first.
    pub async fn list_all(&self) -> Result<Vec<ProjectEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::List,
            sqlx::query_as::<_, ProjectEntity>(
                r#"
                SELECT * FROM projects
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a project by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProjectEntity>, sqlx::Error> {
        timed(
            TABLE,
            Operation::FindById,
            sqlx::query_as::<_, ProjectEntity>(
                r#"
                SELECT * FROM projects WHERE id = ?1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Insert a project stamped with the current time.
    pub async fn create(&self, project: &NewProject) -> Result<ProjectEntity, sqlx::Error> {
        timed(TABLE, Operation::Create, insert(&self.pool, project, Utc::now())).await
    }

    /// Count stored projects.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        timed(TABLE, Operation::Count, count(&self.pool)).await
    }
}

pub(crate) async fn insert<'e, E>(
    executor: E,
    project: &NewProject,
    created_at: DateTime<Utc>,
) -> Result<ProjectEntity, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ProjectEntity>(
        r#"
        INSERT INTO projects (title, description, tech_stack, github_link, live_link, image, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        RETURNING *
        "#,
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.tech_stack)
    .bind(&project.github_link)
    .bind(&project.live_link)
    .bind(&project.image)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub(crate) async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(executor)
        .await?;
    Ok(count.0)
}
