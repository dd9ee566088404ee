use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Admin account row
///
/// Read only by the login flow and the authorization guard; the password
/// hash never leaves this module's consumers.
#[derive(Debug, Clone, FromRow)]
pub struct AdminAccount {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

/// Request DTO for admin login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response DTO for a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub email: String,
    pub role: String,
}
