//! Client review routes
//!
//! Creation is intentionally open to unauthenticated visitors; spam control
//! is out of scope. Moderation (delete) is back-office only.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{ApiJson, ApiQuery, Created, DataResponse, MessageResponse};
use crate::app::AppState;
use crate::auth::RequireAdmin;
use crate::domain::{CreateReviewRequest, ReviewListQuery};
use crate::error::ApiError;
use crate::store::{self, clamp_limit};
use crate::validate;

/// GET /reviews
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ReviewListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = store::reviews::list(&state.db, clamp_limit(query.limit)).await?;
    Ok(Json(DataResponse::new(reviews)))
}

/// POST /reviews
///
/// A referenced project must exist; a dangling reference is a validation
/// failure, not a 404.
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    ApiJson(mut req): ApiJson<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::validate_review(&mut req).map_err(ApiError::validation)?;

    if let Some(project_id) = req.project_id {
        if store::projects::get(&state.db, project_id).await?.is_none() {
            return Err(ApiError::bad_request("Referenced project does not exist"));
        }
    }

    let review = store::reviews::create(&state.db, &req).await?;

    tracing::info!(review_id = %review.id, rating = review.rating, "Review received");

    Ok(Created(DataResponse::new(review)))
}

/// DELETE /reviews/:review_id
pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = store::reviews::delete(&state.db, review_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Review not found"));
    }

    tracing::info!(
        review_id = %review_id,
        admin = %admin.auth.email,
        "Review deleted"
    );

    Ok(Json(MessageResponse::new("Review deleted")))
}
