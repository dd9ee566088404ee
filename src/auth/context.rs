use uuid::Uuid;

use super::Claims;

/// Authenticated caller context extracted from a verified JWT
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Admin account ID (from JWT sub claim)
    pub account_id: Uuid,

    /// Account email
    pub email: String,

    /// Account role as carried by the token
    pub role: String,
}

impl AuthContext {
    pub fn from_claims(claims: &Claims) -> Result<Self, &'static str> {
        let account_id =
            Uuid::parse_str(&claims.sub).map_err(|_| "Invalid account ID in token")?;

        Ok(Self {
            account_id,
            email: claims.email.clone(),
            role: claims.role.clone(),
        })
    }
}
