//! Contact submission storage

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{ContactStatus, ContactSubmission, CreateContactRequest, GroupCount};

const COLUMNS: &str = "id, name, email, phone, project_type, message, status, created_at, updated_at";

/// List submissions, newest first, optionally filtered by status.
pub async fn list(
    db: &PgPool,
    status: Option<ContactStatus>,
    limit: Option<i64>,
) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT {COLUMNS}
        FROM contact_submissions
        WHERE ($1::contact_status IS NULL OR status = $1)
        ORDER BY created_at DESC
        LIMIT $2
        "#
    );

    sqlx::query_as::<_, ContactSubmission>(&query)
        .bind(status)
        .bind(limit)
        .fetch_all(db)
        .await
}

pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<ContactSubmission>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");

    sqlx::query_as::<_, ContactSubmission>(&query)
        .bind(id)
        .fetch_optional(db)
        .await
}

/// Insert a validated submission; new rows always start in status `new`.
pub async fn create(
    db: &PgPool,
    req: &CreateContactRequest,
) -> Result<ContactSubmission, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO contact_submissions (id, name, email, phone, project_type, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, ContactSubmission>(&query)
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.project_type)
        .bind(&req.message)
        .fetch_one(db)
        .await
}

/// Set the lifecycle status. Returns `None` for an unknown id.
pub async fn update_status(
    db: &PgPool,
    id: Uuid,
    status: ContactStatus,
) -> Result<Option<ContactSubmission>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE contact_submissions
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, ContactSubmission>(&query)
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await
}

/// Delete a submission. Returns `false` for an unknown id.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
        .fetch_one(db)
        .await
}

pub async fn count_with_status(
    db: &PgPool,
    status: ContactStatus,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions WHERE status = $1")
        .bind(status)
        .fetch_one(db)
        .await
}

/// Submission counts grouped by lifecycle status.
pub async fn count_by_status(db: &PgPool) -> Result<Vec<GroupCount>, sqlx::Error> {
    sqlx::query_as::<_, GroupCount>(
        r#"
        SELECT status::text AS "group", COUNT(*) AS count
        FROM contact_submissions
        GROUP BY status
        ORDER BY status
        "#,
    )
    .fetch_all(db)
    .await
}

/// The most recently received submissions.
pub async fn recent(db: &PgPool, limit: i64) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    let query = format!(
        "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC LIMIT $1"
    );

    sqlx::query_as::<_, ContactSubmission>(&query)
        .bind(limit)
        .fetch_all(db)
        .await
}
