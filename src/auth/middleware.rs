use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{jwt, AuthContext};
use crate::app::AppState;
use crate::error::ErrorResponse;
use crate::store;

/// Extractor that requires a valid Bearer token.
///
/// Example:
/// ```ignore
/// async fn protected_route(auth: RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}", auth.email)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthContext);

impl std::ops::Deref for RequireAuth {
    type Target = AuthContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidFormat,
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match &self {
            AuthError::MissingToken => "Missing authorization token",
            AuthError::InvalidFormat => "Invalid authorization format",
            AuthError::InvalidToken => "Invalid or expired token",
        };

        let body = ErrorResponse {
            error: message.to_string(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireAuth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidFormat)?;

        // Parse Bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidFormat)?;

        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        // Verify token
        let claims = jwt::verify_token(token, &state.settings.jwt_secret).map_err(|e| {
            tracing::warn!(error = %e, "JWT verification failed");
            AuthError::InvalidToken
        })?;

        // Build auth context
        let context = AuthContext::from_claims(&claims).map_err(|e| {
            tracing::warn!(error = %e, "Failed to build auth context");
            AuthError::InvalidToken
        })?;

        Ok(RequireAuth(context))
    }
}

/// Extractor that requires admin privileges.
///
/// Uses [`RequireAuth`] internally, then re-checks the role against the
/// admins table so a revoked account is denied even with a live token.
/// Runs before body deserialization: an unauthorized caller learns nothing
/// about payload validity or entity existence.
#[derive(Debug, Clone)]
pub struct RequireAdmin {
    pub auth: RequireAuth,
}

impl RequireAdmin {
    pub fn account_id(&self) -> uuid::Uuid {
        self.auth.account_id
    }
}

#[derive(Debug)]
pub enum AdminAuthError {
    NotAuthenticated,
    NotAdmin,
    DatabaseError,
}

impl IntoResponse for AdminAuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AdminAuthError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required",
            ),
            AdminAuthError::NotAdmin => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "Admin privileges required",
            ),
            AdminAuthError::DatabaseError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "An internal error occurred",
            ),
        };

        let body = ErrorResponse {
            error: message.to_string(),
            code: code.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireAdmin {
    type Rejection = AdminAuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth = RequireAuth::from_request_parts(parts, state)
            .await
            .map_err(|_| AdminAuthError::NotAuthenticated)?;

        if auth.role != "admin" {
            tracing::warn!(account_id = %auth.account_id, "Non-admin token on admin route");
            return Err(AdminAuthError::NotAdmin);
        }

        // The account must still exist with the admin role
        let role = store::admins::find_role(&state.db, auth.account_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Admin role lookup failed");
                AdminAuthError::DatabaseError
            })?;

        if role.as_deref() != Some("admin") {
            tracing::warn!(account_id = %auth.account_id, "Admin role revoked or unknown account");
            return Err(AdminAuthError::NotAdmin);
        }

        Ok(RequireAdmin { auth })
    }
}
