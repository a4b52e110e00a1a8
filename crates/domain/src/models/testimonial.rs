//! Testimonial domain model.
//!
//! Testimonials are auto-approved: every insert stores `approved = true` and
//! there is no pending or rejected state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rating used when a testimonial is submitted without one.
pub const DEFAULT_RATING: i32 = 5;

/// A testimonial left by a client or colleague.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub rating: i32,
    pub feedback: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for inserting a testimonial.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub rating: i32,
    pub feedback: String,
}

impl NewTestimonial {
    pub fn new(name: impl Into<String>, feedback: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: String::new(),
            rating: DEFAULT_RATING,
            feedback: feedback.into(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }
}

fn default_rating() -> i32 {
    DEFAULT_RATING
}

/// Request payload for submitting a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonialRequest {
    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Role must be at most 100 characters"))]
    pub role: Option<String>,

    #[serde(default = "default_rating")]
    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: i32,

    #[validate(
        custom(function = "shared::validation::validate_not_blank"),
        length(max = 2000, message = "Feedback must be at most 2000 characters")
    )]
    pub feedback: String,
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(req: CreateTestimonialRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            role: req.role.map(|r| r.trim().to_string()).unwrap_or_default(),
            rating: req.rating,
            feedback: req.feedback.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, rating: i32, feedback: &str) -> CreateTestimonialRequest {
        CreateTestimonialRequest {
            name: name.to_string(),
            role: Some("CTO".to_string()),
            rating,
            feedback: feedback.to_string(),
        }
    }

    #[test]
    fn test_new_testimonial_defaults() {
        let t = NewTestimonial::new("Ana", "Great work");
        assert_eq!(t.rating, 5);
        assert_eq!(t.role, "");
    }

    #[test]
    fn test_request_valid() {
        assert!(request("Ana", 4, "Great work").validate().is_ok());
    }

    #[test]
    fn test_request_blank_name_rejected() {
        let errors = request("   ", 5, "Great").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_request_blank_feedback_rejected() {
        let errors = request("Ana", 5, "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("feedback"));
    }

    #[test]
    fn test_request_rating_out_of_range() {
        for rating in [0, 6] {
            let errors = request("Ana", rating, "Great").validate().unwrap_err();
            let field_errors = errors.field_errors();
            let rating_errors = field_errors["rating"];
            assert_eq!(rating_errors[0].code, "rating_range");
            assert_eq!(
                rating_errors[0].message.as_deref(),
                Some("Rating must be between 1 and 5")
            );
        }
    }

    #[test]
    fn test_request_rating_defaults_to_five() {
        let req: CreateTestimonialRequest =
            serde_json::from_str(r#"{"name":"Ana","feedback":"Great"}"#).unwrap();
        assert_eq!(req.rating, 5);
        assert!(req.role.is_none());
    }

    #[test]
    fn test_request_into_new_testimonial_trims() {
        let mut req = request("  Ana ", 3, " Great work \n");
        req.role = None;
        let t: NewTestimonial = req.into();
        assert_eq!(t.name, "Ana");
        assert_eq!(t.role, "");
        assert_eq!(t.rating, 3);
        assert_eq!(t.feedback, "Great work");
    }
}
