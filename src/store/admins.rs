//! Admin account storage
//!
//! Read by the login flow and the authorization guard only. Password hashes
//! never travel past the auth routes.

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::AdminAccount;

pub async fn find_by_email(
    db: &PgPool,
    email: &str,
) -> Result<Option<AdminAccount>, sqlx::Error> {
    sqlx::query_as::<_, AdminAccount>(
        "SELECT id, email, password_hash, role, created_at FROM admins WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(db)
    .await
}

/// Role of an account, or `None` when the account no longer exists.
pub async fn find_role(db: &PgPool, id: Uuid) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT role FROM admins WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Insert an admin account if the email is not taken. Used by the bootstrap
/// path at startup; returns `false` when the account already existed.
pub async fn create_if_absent(
    db: &PgPool,
    email: &str,
    password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO admins (id, email, password_hash, role)
        VALUES ($1, $2, $3, 'admin')
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(password_hash)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}
