//! Admin authentication routes

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::{ApiJson, DataResponse};
use crate::app::AppState;
use crate::auth::{jwt, password, RequireAuth};
use crate::domain::auth::{LoginRequest, LoginResponse};
use crate::error::ApiError;
use crate::store;

/// POST /auth/login
///
/// Verify admin credentials and issue an access token. Unknown email and
/// wrong password produce the same response.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let account = store::admins::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    let verified = password::verify_password(&req.password, &account.password_hash)
        .map_err(|e| ApiError::internal(format!("Password verification failed: {}", e)))?;
    if !verified {
        tracing::warn!(email = %email, "Failed admin login attempt");
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = jwt::generate_token(
        account.id,
        &account.email,
        &account.role,
        &state.settings.jwt_secret,
        state.settings.jwt_expiry_hours,
    )
    .map_err(|e| ApiError::internal(format!("Token generation failed: {}", e)))?;

    tracing::info!(email = %account.email, "Admin logged in");

    Ok(Json(DataResponse::new(LoginResponse {
        token,
        email: account.email,
        role: account.role,
    })))
}

/// GET /auth/me
///
/// Echo the verified token claims back to the caller.
pub async fn me(auth: RequireAuth) -> impl IntoResponse {
    Json(serde_json::json!({
        "account_id": auth.account_id,
        "email": auth.email,
        "role": auth.role,
    }))
}
