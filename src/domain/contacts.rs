use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a contact-form submission.
///
/// The closed set is enforced end to end: serde rejects anything else at the
/// boundary, and the column stores the lowercase name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "contact_status", rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Contacted,
    Closed,
}

impl Default for ContactStatus {
    fn default() -> Self {
        Self::New
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Closed => "closed",
        };
        f.write_str(s)
    }
}

/// Contact-form submission entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub project_type: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for the public contact form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub project_type: String,
    pub message: String,
}

/// Request DTO for the admin status update
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

/// Admin list filter for contact submissions
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ContactListQuery {
    #[serde(default)]
    pub status: Option<ContactStatus>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rejects_values_outside_the_closed_set() {
        assert!(serde_json::from_str::<ContactStatus>("\"new\"").is_ok());
        assert!(serde_json::from_str::<ContactStatus>("\"contacted\"").is_ok());
        assert!(serde_json::from_str::<ContactStatus>("\"closed\"").is_ok());
        assert!(serde_json::from_str::<ContactStatus>("\"archived\"").is_err());
        // Casing matters: the wire format is lowercase
        assert!(serde_json::from_str::<ContactStatus>("\"New\"").is_err());
    }

    #[test]
    fn status_update_rejects_unknown_fields() {
        let err = serde_json::from_str::<UpdateContactStatusRequest>(
            r#"{"status":"new","note":"call back"}"#,
        );
        assert!(err.is_err());
    }
}
