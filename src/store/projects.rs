//! Portfolio project storage

use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    CreateProjectRequest, GroupCount, Project, ProjectType, UpdateProjectRequest,
};

const COLUMNS: &str = "id, title, description, full_description, location, date, client, \
                       project_type, featured, images, main_image, created_at, updated_at";

/// List projects, newest first, with optional featured/type filters.
pub async fn list(
    db: &PgPool,
    featured: Option<bool>,
    project_type: Option<ProjectType>,
    limit: Option<i64>,
) -> Result<Vec<Project>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT {COLUMNS}
        FROM projects
        WHERE ($1::boolean IS NULL OR featured = $1)
        AND ($2::project_type IS NULL OR project_type = $2)
        ORDER BY created_at DESC
        LIMIT $3
        "#
    );

    sqlx::query_as::<_, Project>(&query)
        .bind(featured)
        .bind(project_type)
        .bind(limit)
        .fetch_all(db)
        .await
}

pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");

    sqlx::query_as::<_, Project>(&query)
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create(db: &PgPool, req: &CreateProjectRequest) -> Result<Project, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO projects
            (id, title, description, full_description, location, date, client,
             project_type, featured, images, main_image)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, Project>(&query)
        .bind(Uuid::new_v4())
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.full_description)
        .bind(&req.location)
        .bind(&req.date)
        .bind(&req.client)
        .bind(req.project_type)
        .bind(req.featured)
        .bind(&req.images)
        .bind(&req.main_image)
        .fetch_one(db)
        .await
}

/// Partial update; absent fields keep their stored values.
/// Returns `None` for an unknown id.
pub async fn update(
    db: &PgPool,
    id: Uuid,
    req: &UpdateProjectRequest,
) -> Result<Option<Project>, sqlx::Error> {
    let query = format!(
        r#"
        UPDATE projects SET
            title = COALESCE($2, title),
            description = COALESCE($3, description),
            full_description = COALESCE($4, full_description),
            location = COALESCE($5, location),
            date = COALESCE($6, date),
            client = COALESCE($7, client),
            project_type = COALESCE($8, project_type),
            featured = COALESCE($9, featured),
            images = COALESCE($10, images),
            main_image = COALESCE($11, main_image),
            updated_at = NOW()
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    );

    sqlx::query_as::<_, Project>(&query)
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.full_description)
        .bind(&req.location)
        .bind(&req.date)
        .bind(&req.client)
        .bind(req.project_type)
        .bind(req.featured)
        .bind(&req.images)
        .bind(&req.main_image)
        .fetch_optional(db)
        .await
}

/// Delete a project. Returns `false` for an unknown id.
pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(db)
        .await
}

pub async fn count_featured(db: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE featured = true")
        .fetch_one(db)
        .await
}

/// Project counts grouped by category.
pub async fn count_by_type(db: &PgPool) -> Result<Vec<GroupCount>, sqlx::Error> {
    sqlx::query_as::<_, GroupCount>(
        r#"
        SELECT project_type::text AS "group", COUNT(*) AS count
        FROM projects
        GROUP BY project_type
        ORDER BY project_type
        "#,
    )
    .fetch_all(db)
    .await
}

/// The most recently created projects.
pub async fn recent(db: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1");

    sqlx::query_as::<_, Project>(&query)
        .bind(limit)
        .fetch_all(db)
        .await
}
