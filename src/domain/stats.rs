use serde::Serialize;

use super::contacts::ContactSubmission;
use super::projects::Project;

/// Aggregate dashboard payload for the admin back-office
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub totals: EntityTotals,
    /// Contact submissions grouped by lifecycle status
    pub contacts_by_status: Vec<GroupCount>,
    /// Portfolio projects grouped by category
    pub projects_by_type: Vec<GroupCount>,
    /// Five most recently created projects
    pub recent_projects: Vec<Project>,
    /// Five most recently received contact submissions
    pub recent_contacts: Vec<ContactSubmission>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityTotals {
    pub contacts: i64,
    pub new_contacts: i64,
    pub projects: i64,
    pub featured_projects: i64,
    pub reviews: i64,
    pub team_members: i64,
    pub active_team_members: i64,
}

/// One bucket of an aggregate grouping
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct GroupCount {
    pub group: String,
    pub count: i64,
}
