//! Integration tests for testimonial submission.

mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, get_request, json_request, parse_response_body, row_count, setup};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_create_testimonial_is_published() {
    let (db, config) = setup(&[]).await;
    let name: String = Name().fake();
    let feedback: String = Sentence(3..8).fake();

    let app = create_test_app(config.clone(), db.pool.clone());
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/testimonials",
            json!({ "name": name, "role": "CTO", "rating": 4, "feedback": feedback }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], name.as_str());
    assert_eq!(body["rating"], 4);
    assert_eq!(body["approved"], true);

    // Newest first, so it leads the public list.
    let app = create_test_app(config, db.pool.clone());
    let response = app.oneshot(get_request("/api/testimonials")).await.unwrap();
    let list = parse_response_body(response).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
    assert_eq!(list[0]["id"], body["id"]);
}

#[tokio::test]
async fn test_create_testimonial_defaults() {
    let (db, config) = setup(&[]).await;
    let app = create_test_app(config, db.pool.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/testimonials",
            json!({ "name": "  Sam  ", "feedback": "Solid work." }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["name"], "Sam");
    assert_eq!(body["role"], "");
    assert_eq!(body["rating"], 5);
}

#[tokio::test]
async fn test_create_testimonial_rating_out_of_range() {
    let (db, config) = setup(&[]).await;
    let before = row_count(&db.pool, "testimonials").await;

    for rating in [0, 6] {
        let app = create_test_app(config.clone(), db.pool.clone());
        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/testimonials",
                json!({ "name": "Sam", "rating": rating, "feedback": "Ok" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"][0]["field"], "rating");
        assert_eq!(body["details"][0]["message"], "Rating must be between 1 and 5");
    }

    assert_eq!(row_count(&db.pool, "testimonials").await, before);
}

#[tokio::test]
async fn test_create_testimonial_blank_fields() {
    let (db, config) = setup(&[]).await;
    let app = create_test_app(config, db.pool.clone());

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/testimonials",
            json!({ "name": "   ", "feedback": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["feedback", "name"]);
}
