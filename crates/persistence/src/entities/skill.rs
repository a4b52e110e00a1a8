//! Skill entity (database row mapping).

use sqlx::FromRow;

use domain::models::Skill;

/// Database row mapping for the skills table.
#[derive(Debug, Clone, FromRow)]
pub struct SkillEntity {
    pub id: i64,
    pub name: String,
    pub percentage: i32,
    pub category: String,
}

impl From<SkillEntity> for Skill {
    fn from(entity: SkillEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            percentage: entity.percentage,
            category: entity.category,
        }
    }
}
