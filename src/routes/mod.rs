pub mod auth;
pub mod contacts;
pub mod health;
pub mod projects;
pub mod reviews;
pub mod stats;
pub mod team;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        // Contact submissions
        .route("/contacts", post(contacts::create_contact))
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts/:contact_id", get(contacts::get_contact))
        .route(
            "/contacts/:contact_id",
            patch(contacts::update_contact_status),
        )
        .route("/contacts/:contact_id", delete(contacts::delete_contact))
        // Portfolio projects
        .route("/projects", get(projects::list_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/:project_id", get(projects::get_project))
        .route("/projects/:project_id", put(projects::update_project))
        .route("/projects/:project_id", delete(projects::delete_project))
        // Deprecated: gallery entries were folded into projects
        .route("/gallery", get(projects::gallery_gone))
        // Reviews
        .route("/reviews", get(reviews::list_reviews))
        .route("/reviews", post(reviews::create_review))
        .route("/reviews/:review_id", delete(reviews::delete_review))
        // Team
        .route("/team", get(team::list_team))
        .route("/team", post(team::create_team_member))
        .route("/team/:member_id", put(team::update_team_member))
        .route("/team/:member_id", delete(team::delete_team_member))
        // Admin dashboard
        .route("/stats", get(stats::get_stats))
}
