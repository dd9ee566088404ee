//! Tests for `ApiError` → HTTP response mapping.
//!
//! Each variant must produce the right status code, error code, and message.
//! No HTTP server is needed; `IntoResponse` is called directly.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use decora_backend::error::{ApiError, FieldError};

/// Helper: convert an `ApiError` into its status code and parsed JSON body.
async fn error_to_response(err: ApiError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_field_details() {
    let err = ApiError::validation(vec![
        FieldError::new("rating", "must be between 1 and 5"),
        FieldError::new("review", "must be at least 10 characters"),
    ]);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"][0]["field"], "rating");
    assert_eq!(json["details"][1]["field"], "review");
    // The top-level message names the first violated field
    assert!(json["error"].as_str().unwrap().contains("rating"));
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = ApiError::unauthorized("Missing authorization token");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing authorization token");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = ApiError::forbidden("Admin privileges required");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = ApiError::not_found("Project not found");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project not found");
}

#[tokio::test]
async fn gone_error_returns_410() {
    let err = ApiError::Gone("The gallery endpoint has been removed".to_string());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::GONE);
    assert_eq!(json["code"], "GONE");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = ApiError::internal("secret database credentials leaked");

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    // The response body must not contain the original error details
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = ApiError::Database(sqlx::Error::RowNotFound);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATABASE_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
