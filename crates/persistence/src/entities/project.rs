//! Project entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Project;

/// Database row mapping for the projects table.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectEntity> for Project {
    fn from(entity: ProjectEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            tech_stack: entity.tech_stack,
            github_link: entity.github_link,
            live_link: entity.live_link,
            image: entity.image,
            created_at: entity.created_at,
        }
    }
}
