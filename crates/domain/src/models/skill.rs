//! Skill domain model.

use serde::{Deserialize, Serialize};

/// Category used when a skill is created without one.
pub const DEFAULT_SKILL_CATEGORY: &str = "Technical";

/// A skill with a self-assessed proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    /// Proficiency from 0 to 100. Storage does not enforce the range.
    pub percentage: i32,
    pub category: String,
}

/// Fields for inserting a skill.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub percentage: i32,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_SKILL_CATEGORY.to_string()
}

impl NewSkill {
    pub fn new(name: impl Into<String>, percentage: i32) -> Self {
        Self {
            name: name.into(),
            percentage,
            category: default_category(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}
