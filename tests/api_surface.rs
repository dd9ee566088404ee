//! Router-level tests for the request pipeline.
//!
//! These exercise the pieces that run before any storage I/O — extractor
//! rejections, the validation layer, the authorization guard, and the
//! deprecated-endpoint handler — against the real router. The database pool
//! is created lazily and never connected.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::util::ServiceExt;

use decora_backend::app::{create_app, AppState};
use decora_backend::config::{Environment, Settings};
use decora_backend::services::spawn_notification_worker;

fn test_settings() -> Settings {
    Settings {
        env: Environment::Dev,
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "postgres://postgres@localhost/decora_test".to_string(),
        database_max_connections: 1,
        cors_allow_origins: vec!["http://localhost:3000".to_string()],
        jwt_secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        jwt_expiry_hours: 1,
        bootstrap_admin_email: None,
        bootstrap_admin_password: None,
        smtp: None,
        notify_email_to: None,
    }
}

fn test_app() -> Router {
    let settings = test_settings();
    // Lazy pool: connections are only opened on first query, which these
    // tests never reach.
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&settings.database_url)
        .expect("lazy pool");
    let notifications = spawn_notification_worker(None);
    let state = AppState::new(pool, settings, notifications);
    create_app(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// Authorization guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_mutation_without_token_is_401_regardless_of_payload() {
    // Payload is invalid too; authorization must win so existence and
    // validity never leak to unauthorized callers.
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/projects",
            serde_json::json!({"title": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn admin_delete_without_token_is_401_not_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/contacts/00000000-0000-0000-0000-000000000000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_bearer_token_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/stats")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_authorization_is_401() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/contacts")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Validation layer over the public surface
// ---------------------------------------------------------------------------

#[tokio::test]
async fn review_with_out_of_range_rating_is_400_naming_the_field() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/reviews",
            serde_json::json!({
                "name": "Marc Beaumont",
                "email": "marc@example.com",
                "rating": 6,
                "review": "Wonderful work on our lobby refit."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "rating");
}

#[tokio::test]
async fn review_with_short_text_is_400() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/reviews",
            serde_json::json!({
                "name": "Marc Beaumont",
                "email": "marc@example.com",
                "rating": 4,
                "review": "Too short"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "review");
}

#[tokio::test]
async fn contact_with_missing_field_is_400_identifying_it() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/contacts",
            serde_json::json!({
                "name": "Ana Ruiz",
                "email": "ana@example.com",
                "project_type": "Residential"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn contact_with_invalid_email_is_400() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/contacts",
            serde_json::json!({
                "name": "Ana Ruiz",
                "email": "not-an-email",
                "project_type": "Residential",
                "message": "We are renovating a two-bedroom flat."
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "email");
}

// ---------------------------------------------------------------------------
// Query filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_project_filter_key_is_rejected() {
    let response = test_app()
        .oneshot(get_request("/projects?sort=price"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_boolean_featured_filter_is_rejected() {
    let response = test_app()
        .oneshot(get_request("/projects?featured=maybe"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_status_filter_outside_the_set_is_rejected() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/contacts?status=archived")
                .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Guard still wins over query parsing
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Deprecated endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gallery_endpoint_is_gone() {
    let response = test_app().oneshot(get_request("/gallery")).await.unwrap();

    assert_eq!(response.status(), StatusCode::GONE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "GONE");
    assert!(json["error"].as_str().unwrap().contains("/projects"));
}
