use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use domain::services::DeliveryError;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{contact, health, portfolio, testimonials};
use crate::services::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub email: EmailService,
    /// Signs the flash cookie.
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Builds the router with an SMTP-backed email service.
///
/// Expects a validated config: the secret key must be at least 32 bytes.
pub fn create_app(config: Config, pool: SqlitePool) -> Result<Router, DeliveryError> {
    let email = EmailService::new(config.email.clone())?;
    Ok(create_app_with_email(config, pool, email))
}

/// Builds the router around an already constructed email service.
pub fn create_app_with_email(config: Config, pool: SqlitePool, email: EmailService) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        cookie_key: Key::derive_from(config.server.secret_key.as_bytes()),
        config: config.clone(),
        email,
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Browser-facing page and form
    let site_routes = Router::new()
        .route("/", get(portfolio::index))
        .route("/contact", post(contact::submit_contact_form));

    let api_routes = Router::new()
        .route("/api/projects", get(portfolio::list_projects))
        .route("/api/projects/:id", get(portfolio::get_project))
        .route("/api/services", get(portfolio::list_services))
        .route("/api/skills", get(portfolio::list_skills))
        .route(
            "/api/testimonials",
            get(portfolio::list_testimonials).post(testimonials::create_testimonial),
        )
        .route("/api/contact", post(contact::submit_contact_json));

    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(site_routes)
        .merge(api_routes)
        .merge(ops_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
