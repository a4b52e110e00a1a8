//! Contact form endpoints.
//!
//! Submissions are never stored: a valid one becomes one email to the owner.

use axum::{
    extract::State,
    response::Redirect,
    Form, Json,
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use domain::models::contact::ContactForm;
use domain::models::{FlashKind, FlashLevel};
use domain::services::submit_contact;
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;

/// Signed cookie carrying the flash message across the redirect.
pub const FLASH_COOKIE: &str = "portfolio_flash";

/// Where the form POST sends the browser back to.
pub const CONTACT_REDIRECT: &str = "/#contact";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// The submission was accepted.
    pub success: bool,
    /// The notification actually reached the mail server.
    pub delivered: bool,
    pub level: FlashLevel,
    pub message: String,
}

fn flash_cookie(kind: FlashKind) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, kind.as_str()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Browser form submission.
///
/// POST /contact
///
/// Always redirects back to the contact section; the outcome travels in the
/// signed flash cookie.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ContactForm>,
) -> (SignedCookieJar, Redirect) {
    let feedback = state.config.email.failure_feedback;

    let kind = match submit_contact(&state.email, feedback, form).await {
        Ok(outcome) => outcome.flash,
        Err(e) => {
            info!(error = %e, "Rejected contact form");
            FlashKind::ContactInvalid
        }
    };

    (jar.add(flash_cookie(kind)), Redirect::to(CONTACT_REDIRECT))
}

/// JSON submission.
///
/// POST /api/contact
pub async fn submit_contact_json(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<ContactResponse>, ApiError> {
    let feedback = state.config.email.failure_feedback;
    let outcome = submit_contact(&state.email, feedback, form).await?;
    let flash = outcome.flash.message();

    Ok(Json(ContactResponse {
        success: true,
        delivered: outcome.delivered(),
        level: flash.level,
        message: flash.message,
    }))
}
