//! Testimonial submission endpoint.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::testimonial::CreateTestimonialRequest;
use domain::models::{NewTestimonial, Testimonial};
use persistence::repositories::TestimonialRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;

/// Add a testimonial. Submissions are published immediately.
///
/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<Testimonial>), ApiError> {
    request.validate()?;

    let new_testimonial = NewTestimonial::from(request);
    let entity = TestimonialRepository::new(state.pool.clone())
        .create(&new_testimonial)
        .await?;
    let testimonial: Testimonial = entity.into();

    info!(
        testimonial_id = testimonial.id,
        rating = testimonial.rating,
        "Testimonial created"
    );

    Ok((StatusCode::CREATED, Json(testimonial)))
}
