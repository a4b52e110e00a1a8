//! Common test utilities for integration tests.
//!
//! Each test gets its own SQLite file in a temporary directory, initialized
//! exactly as the binary does at startup.

// Not every helper is used by every test binary.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::services::{MailTransport, RecordingMailTransport};
use portfolio_api::{
    app::{create_app, create_app_with_email},
    config::Config,
    services::EmailService,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

/// A migrated, seeded database that lives as long as this value.
pub struct TestDb {
    pub pool: SqlitePool,
    pub dir: TempDir,
}

/// Test configuration pointing at a file inside `dir`, with no SMTP credential.
pub fn test_config(dir: &TempDir, overrides: &[(&str, &str)]) -> Config {
    let path = dir.path().join("portfolio.db");
    let path = path.to_string_lossy().into_owned();

    let mut all: Vec<(&str, &str)> = vec![("database.path", path.as_str())];
    all.extend_from_slice(overrides);

    let config = Config::load_for_test(&all).expect("Failed to load test config");
    config.validate().expect("Test config should be valid");
    config
}

/// Create and initialize a test database.
pub async fn create_test_db(config: &Config) -> SqlitePool {
    let pool = persistence::db::create_pool(&config.database.pool_config())
        .await
        .expect("Failed to open test database");
    persistence::initialize(&pool)
        .await
        .expect("Failed to initialize test database");
    pool
}

/// Create the test application with the production email wiring.
pub fn create_test_app(config: Config, pool: SqlitePool) -> Router {
    create_app(config, pool).expect("Failed to build app")
}

/// Create the test application delivering through `transport`.
pub fn create_test_app_with_transport(
    config: Config,
    pool: SqlitePool,
    transport: RecordingMailTransport,
) -> Router {
    create_test_app_with_mailer(config, pool, Arc::new(transport))
}

/// Create the test application delivering through any transport.
pub fn create_test_app_with_mailer(
    config: Config,
    pool: SqlitePool,
    transport: Arc<dyn MailTransport>,
) -> Router {
    let email = EmailService::with_transport(config.email.clone(), transport);
    create_app_with_email(config, pool, email)
}

/// A fresh temp dir, config and seeded pool.
pub async fn setup(overrides: &[(&str, &str)]) -> (TestDb, Config) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&dir, overrides);
    let pool = create_test_db(&config).await;
    (TestDb { pool, dir }, config)
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a urlencoded form POST.
pub fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// The `name=value` pair of a `Set-Cookie` header named `name`.
pub fn set_cookie_pair(response: &axum::response::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", name)))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Number of rows in `table`.
pub async fn row_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
