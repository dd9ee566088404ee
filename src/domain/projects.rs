use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Portfolio project category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "project_type")]
pub enum ProjectType {
    Residential,
    Commercial,
    Hospitality,
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Hospitality => "Hospitality",
        };
        f.write_str(s)
    }
}

/// Portfolio project entity
///
/// `images` is an ordered, non-empty sequence of URLs; `main_image` is the
/// cover shown on listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub full_description: Option<String>,
    pub location: String,
    pub date: String,
    pub client: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub featured: bool,
    pub images: Vec<String>,
    pub main_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a project
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    pub location: String,
    pub date: String,
    pub client: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub images: Vec<String>,
    pub main_image: String,
}

/// Request DTO for updating a project
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, rename = "type")]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub main_image: Option<String>,
}

impl UpdateProjectRequest {
    /// True when no field is present, which the service rejects outright.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.full_description.is_none()
            && self.location.is_none()
            && self.date.is_none()
            && self.client.is_none()
            && self.project_type.is_none()
            && self.featured.is_none()
            && self.images.is_none()
            && self.main_image.is_none()
    }
}

/// Public list filter for projects
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectListQuery {
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, rename = "type")]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_rejects_values_outside_the_closed_set() {
        assert!(serde_json::from_str::<ProjectType>("\"Residential\"").is_ok());
        assert!(serde_json::from_str::<ProjectType>("\"Hospitality\"").is_ok());
        assert!(serde_json::from_str::<ProjectType>("\"Industrial\"").is_err());
    }

    #[test]
    fn update_request_knows_when_it_is_empty() {
        let empty = UpdateProjectRequest::default();
        assert!(empty.is_empty());

        let req = UpdateProjectRequest {
            featured: Some(true),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }
}
