use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Studio team member entity
///
/// `display_order` drives the stable public ordering among active members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a team member
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMemberRequest {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    #[serde(rename = "order")]
    pub display_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Request DTO for updating a team member
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateTeamMemberRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "order")]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl UpdateTeamMemberRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.bio.is_none()
            && self.image.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

/// Public list filter for team members
///
/// Public callers get active members by default; the back-office passes
/// `active=false` to see hidden entries too.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TeamListQuery {
    #[serde(default)]
    pub active: Option<bool>,
}
