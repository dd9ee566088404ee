//! Client review storage

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CreateReviewRequest, Review};

const COLUMNS: &str =
    "id, name, email, phone, rating, review, project_id, created_at, updated_at";

/// List reviews, newest first.
pub async fn list(db: &PgPool, limit: Option<i64>) -> Result<Vec<Review>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT {COLUMNS}
        FROM reviews
        ORDER BY created_at DESC
        LIMIT $1
        "#
    );

    sqlx::query_as::<_, Review>(&query)
        .bind(limit)
        .fetch_all(db)
        .await
}

pub async fn create(db: &PgPool, req: &CreateReviewRequest) -> Result<Review, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO reviews (id, name, email, phone, rating, review, project_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, Review>(&query)
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.rating)
        .bind(&req.review)
        .bind(req.project_id)
        .fetch_one(db)
        .await
}

/// Delete a review (admin moderation). Returns `false` for an unknown id.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(db)
        .await
}
