//! Portfolio project routes

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
use crate::domain::{CreateProjectRequest, ProjectListQuery, UpdateProjectRequest};
use crate::error::ApiError;
use crate::store::{self, clamp_limit};
use crate::validate;

/// GET /projects
///
/// Public portfolio listing, newest first. `featured` and `type` narrow the
/// result; omitting a filter returns everything.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ProjectListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let projects = store::projects::list(
        &state.db,
        query.featured,
        query.project_type,
        clamp_limit(query.limit),
    )
    .await?;
    Ok(Json(DataResponse::new(projects)))
}

/// GET /projects/:project_id
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let project = store::projects::get(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /projects
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    ApiJson(mut req): ApiJson<CreateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate::validate_project(&mut req).map_err(ApiError::validation)?;

    let project = store::projects::create(&state.db, &req).await?;

    tracing::info!(
        project_id = %project.id,
        title = %project.title,
        admin = %admin.auth.email,
        "Project created"
    );

    Ok(Created(DataResponse::new(project)))
}

/// PUT /projects/:project_id
///
/// Partial update; absent fields keep their stored values.
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(project_id): Path<Uuid>,
    ApiJson(mut req): ApiJson<UpdateProjectRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    validate::validate_project_update(&mut req).map_err(ApiError::validation)?;

    let project = store::projects::update(&state.db, project_id, &req)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    tracing::info!(
        project_id = %project_id,
        admin = %admin.auth.email,
        "Project updated"
    );

    Ok(Json(DataResponse::new(project)))
}

/// DELETE /projects/:project_id
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    admin: RequireAdmin,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = store::projects::delete(&state.db, project_id).await?;
    if !deleted {
        return Err(ApiError::not_found("Project not found"));
    }

    tracing::info!(
        project_id = %project_id,
        admin = %admin.auth.email,
        "Project deleted"
    );

    Ok(Json(MessageResponse::new("Project deleted")))
}

/// GET /gallery
///
/// The standalone gallery was folded into project image sequences.
pub async fn gallery_gone() -> ApiError {
    ApiError::Gone("The gallery endpoint has been removed; use /projects instead".to_string())
}
