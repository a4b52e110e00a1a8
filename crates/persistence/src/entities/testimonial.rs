//! Testimonial entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Testimonial;

/// Database row mapping for the testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialEntity {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub rating: i32,
    pub feedback: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TestimonialEntity> for Testimonial {
    fn from(entity: TestimonialEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            role: entity.role,
            rating: entity.rating,
            feedback: entity.feedback,
            approved: entity.approved,
            created_at: entity.created_at,
        }
    }
}
