//! Common validation utilities.

use validator::ValidationError;

/// Lowest testimonial rating.
pub const MIN_RATING: i32 = 1;

/// Highest testimonial rating.
pub const MAX_RATING: i32 = 5;

/// Validates that a text value contains something other than whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a testimonial rating is within 1 to 5.
pub fn validate_rating(rating: impl std::borrow::Borrow<i32>) -> Result<(), ValidationError> {
    let rating: &i32 = rating.borrow();
    if (MIN_RATING..=MAX_RATING).contains(rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 1 and 5".into());
        err.add_param("value".into(), rating);
        Err(err)
    }
}
