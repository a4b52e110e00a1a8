//! Integration tests for health and metrics endpoints.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, parse_response_body, setup};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let (db, config) = setup(&[]).await;
    let app = create_test_app(config, db.pool.clone());

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["connected"], true);
    assert_eq!(body["email"]["configured"], false);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_email_configured() {
    let (db, config) = setup(&[("email.smtp_password", "app-token")]).await;
    let app = create_test_app(config, db.pool.clone());

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["email"]["configured"], true);
}

#[tokio::test]
async fn test_live_and_ready() {
    let (db, config) = setup(&[]).await;

    let app = create_test_app(config.clone(), db.pool.clone());
    let response = app.oneshot(get_request("/api/health/live")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "alive");

    let app = create_test_app(config, db.pool.clone());
    let response = app.oneshot(get_request("/api/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["status"], "ready");
}

#[tokio::test]
async fn test_not_ready_when_pool_closed() {
    let (db, config) = setup(&[]).await;
    let app = create_test_app(config, db.pool.clone());
    db.pool.close().await;

    let response = app.oneshot(get_request("/api/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    portfolio_api::middleware::init_metrics().expect("Failed to install recorder");
    let (db, config) = setup(&[]).await;

    let app = create_test_app(config.clone(), db.pool.clone());
    app.oneshot(get_request("/api/skills")).await.unwrap();

    let app = create_test_app(config, db.pool.clone());
    let response = app.oneshot(get_request("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("http_requests_total"));
}
