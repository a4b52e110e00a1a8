//! Service offering domain model.

use serde::{Deserialize, Serialize};

/// Icon used when a service is created without one.
pub const DEFAULT_SERVICE_ICON: &str = "bi-code-slash";

/// A service offered by the site owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub price_range: Option<String>,
}

/// Fields for inserting a service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewService {
    pub title: String,
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    pub price_range: Option<String>,
}

fn default_icon() -> String {
    DEFAULT_SERVICE_ICON.to_string()
}

impl NewService {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: default_icon(),
            price_range: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }
}
