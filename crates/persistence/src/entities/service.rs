//! Service entity (database row mapping).

use sqlx::FromRow;

use domain::models::Service;

/// Database row mapping for the services table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceEntity {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub price_range: Option<String>,
}

impl From<ServiceEntity> for Service {
    fn from(entity: ServiceEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            icon: entity.icon,
            price_range: entity.price_range,
        }
    }
}
