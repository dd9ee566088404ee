//! Contact submission routes
//!
//! Public creation feeds the admin inbox; everything else is back-office.

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
use crate::domain::{ContactListQuery, CreateContactRequest, UpdateContactStatusRequest};
use crate::error::ApiError;
use crate::services::ContactNotification;
use crate::store::{self, clamp_limit};
use crate::validate;

/// POST /contacts
///
/// Public contact-form submission. The notification email is queued after
/// the row is committed; its failure never affects this response.
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(mut req): ApiJson<CreateContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::validate_contact(&mut req).map_err(ApiError::validation)?;

    let submission = store::contacts::create(&state.db, &req).await?;

    tracing::info!(
        submission_id = %submission.id,
        email = %submission.email,
        "Contact submission received"
    );

    state
        .notifications
        .enqueue(ContactNotification::from(&submission));

    Ok(Created(DataResponse::new(submission)))
}

/// GET /contacts
///
/// Admin inbox listing, newest first, optionally filtered by status.
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdmin,
    ApiQuery(query): ApiQuery<ContactListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let submissions =
        store::contacts::list(&state.db, query.status, clamp_limit(query.limit)).await?;
    Ok(Json(DataResponse::new(submissions)))
}

/// GET /contacts/:contact_id
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdmin,
    Path(contact_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = store::contacts::get(&state.db, contact_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact submission not found"))?;
    Ok(Json(DataResponse::new(submission)))
}

/// PATCH /contacts/:contact_id
///
/// Move a submission through its lifecycle. Setting the current status again
/// is a no-op that returns the stored row unchanged.
pub async fn update_contact_status(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(contact_id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let submission = store::contacts::update_status(&state.db, contact_id, req.status)
        .await?
        .ok_or_else(|| ApiError::not_found("Contact submission not found"))?;

    tracing::info!(
        submission_id = %contact_id,
        status = %req.status,
        admin = %admin.auth.email,
        "Contact submission status updated"
    );

    Ok(Json(DataResponse::new(submission)))
}

/// DELETE /contacts/:contact_id
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(contact_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = store::contacts::delete(&state.db, contact_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Contact submission not found"));
    }

    tracing::info!(
        submission_id = %contact_id,
        admin = %admin.auth.email,
        "Contact submission deleted"
    );

    Ok(Json(MessageResponse::new("Contact submission deleted")))
}
