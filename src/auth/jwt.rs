//! HS256 access-token generation and validation for admin sessions.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::Claims;

/// Generate an HS256 access token for the given admin account.
pub fn generate_token(
    account_id: Uuid,
    email: &str,
    role: &str,
    secret: &str,
    expiry_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: account_id.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(expiry_hours)).timestamp(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Signature and expiration are checked; the default 60s leeway applies.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.validate_aud = false;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

    #[test]
    fn generate_and_verify_round_trip() {
        let id = Uuid::new_v4();
        let token =
            generate_token(id, "admin@decora.test", "admin", SECRET, 24).expect("generate");

        let claims = verify_token(&token, SECRET).expect("verify");
        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.email, "admin@decora.test");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails() {
        // Expired well beyond the default 60-second leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "admin@decora.test".to_string(),
            role: "admin".to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode");

        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_fails() {
        let token = generate_token(Uuid::new_v4(), "admin@decora.test", "admin", SECRET, 24)
            .expect("generate");
        assert!(verify_token(&token, "a-different-secret").is_err());
    }
}
