use serde::{Deserialize, Serialize};

/// JWT claims embedded in every admin access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin account ID)
    pub sub: String,

    /// Account email
    pub email: String,

    /// Account role (only "admin" is issued)
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,
}
