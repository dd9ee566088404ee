//! Team member storage

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};

const COLUMNS: &str =
    "id, name, role, bio, image, display_order, active, created_at, updated_at";

/// List members ordered by their explicit display order (created_at breaks
/// ties so the ordering is stable), optionally filtered to active members.
pub async fn list(db: &PgPool, active: Option<bool>) -> Result<Vec<TeamMember>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT {COLUMNS}
        FROM team_members
        WHERE ($1::boolean IS NULL OR active = $1)
        ORDER BY display_order ASC, created_at ASC
        "#
    );

    sqlx::query_as::<_, TeamMember>(&query)
        .bind(active)
        .fetch_all(db)
        .await
}

pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<TeamMember>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");

    sqlx::query_as::<_, TeamMember>(&query)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(
    db: &PgPool,
    req: &CreateTeamMemberRequest,
) -> Result<TeamMember, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO team_members (id, name, role, bio, image, display_order, active)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, TeamMember>(&query)
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.bio)
        .bind(&req.image)
        .bind(req.display_order)
        .bind(req.active)
        .fetch_one(db)
        .await
}

/// Partial update; absent fields keep their stored values.
/// Returns `None` for an unknown id.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    req: &UpdateTeamMemberRequest,
) -> Result<Option<TeamMember>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE team_members SET
            name = COALESCE($2, name),
            role = COALESCE($3, role),
            bio = COALESCE($4, bio),
            image = COALESCE($5, image),
            display_order = COALESCE($6, display_order),
            active = COALESCE($7, active),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, TeamMember>(&query)
        .bind(id)
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.bio)
        .bind(&req.image)
        .bind(req.display_order)
        .bind(req.active)
        .fetch_optional(db)
        .await
}

/// Delete a member. Returns `false` for an unknown id.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM team_members")
        .fetch_one(db)
        .await
}

pub async fn count_active(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE active = true")
        .fetch_one(db)
        .await
}
