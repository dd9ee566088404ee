use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Client review entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Integer rating, 1 through 5 inclusive
    pub rating: i32,
    pub review: String,
    /// Optional reference to the reviewed portfolio project
    pub project_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for the public review form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub rating: i32,
    pub review: String,
    #[serde(default)]
    pub project_id: Option<Uuid>,
}

/// Public list filter for reviews
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ReviewListQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}
