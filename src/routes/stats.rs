//! Admin dashboard stats route

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::auth::RequireAdmin;
use crate::domain::{ContactStatus, DashboardStats, EntityTotals};
use crate::error::ApiError;
use crate::store;

const RECENT_LIMIT: i64 = 5;

/// GET /stats
///
/// Aggregate dashboard payload: totals per entity, grouped breakdowns, and
/// the most recent projects and contact submissions.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    _admin: RequireAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let db = &state.db;

    let (
        contacts,
        new_contacts,
        projects,
        featured_projects,
        reviews,
        team_members,
        active_team_members,
    ) = tokio::try_join!(
        store::contacts::count(db),
        store::contacts::count_with_status(db, ContactStatus::New),
        store::projects::count(db),
        store::projects::count_featured(db),
        store::reviews::count(db),
        store::team::count(db),
        store::team::count_active(db),
    )?;

    let (contacts_by_status, projects_by_type, recent_projects, recent_contacts) = tokio::try_join!(
        store::contacts::count_by_status(db),
        store::projects::count_by_type(db),
        store::projects::recent(db, RECENT_LIMIT),
        store::contacts::recent(db, RECENT_LIMIT),
    )?;

    let stats = DashboardStats {
        totals: EntityTotals {
            contacts,
            new_contacts,
            projects,
            featured_projects,
            reviews,
            team_members,
            active_team_members,
        },
        contacts_by_status,
        projects_by_type,
        recent_projects,
        recent_contacts,
    };

    Ok(Json(DataResponse::new(stats)))
}
