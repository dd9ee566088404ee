//! Team member routes

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
use crate::domain::{CreateTeamMemberRequest, TeamListQuery, UpdateTeamMemberRequest};
use crate::error::ApiError;
use crate::store;
use crate::validate;

/// GET /team
///
/// Public listing shows active members ordered by display order; the
/// back-office passes `active=false` to inspect hidden entries.
pub async fn list_team(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<TeamListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let active = query.active.or(Some(true));
    let members = store::team::list(&state.db, active).await?;
    Ok(Json(DataResponse::new(members)))
}

/// POST /team
pub async fn create_team_member(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    ApiJson(mut req): ApiJson<CreateTeamMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::validate_team_member(&mut req).map_err(ApiError::validation)?;

    let member = store::team::create(&state.db, &req).await?;

    tracing::info!(
        member_id = %member.id,
        name = %member.name,
        admin = %admin.auth.email,
        "Team member created"
    );

    Ok(Created(DataResponse::new(member)))
}

/// PUT /team/:member_id
///
/// Partial update; absent fields keep their stored values.
pub async fn update_team_member(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(member_id): Path<Uuid>,
    ApiJson(mut req): ApiJson<UpdateTeamMemberRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    validate::validate_team_member_update(&mut req).map_err(ApiError::validation)?;

    let member = store::team::update(&state.db, member_id, &req)
        .await?
        .ok_or_else(|| ApiError::not_found("Team member not found"))?;

    tracing::info!(
        member_id = %member_id,
        admin = %admin.auth.email,
        "Team member updated"
    );

    Ok(Json(DataResponse::new(member)))
}

/// DELETE /team/:member_id
pub async fn delete_team_member(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(member_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = store::team::delete(&state.db, member_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Team member not found"));
    }

    tracing::info!(
        member_id = %member_id,
        admin = %admin.auth.email,
        "Team member deleted"
    );

    Ok(Json(MessageResponse::new("Team member deleted")))
}
