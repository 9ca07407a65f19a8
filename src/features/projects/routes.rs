use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::config::RateLimitRule;
use crate::features::projects::handlers::project_handler::{
    create_project, get_project, list_projects, update_project, ProjectsState,
};
use crate::features::projects::services::ProjectService;
use crate::features::rate_limits::RateLimitService;

/// Create routes for the projects feature
pub fn routes(
    service: Arc<ProjectService>,
    rate_limiter: Arc<RateLimitService>,
    create_rule: RateLimitRule,
) -> Router {
    let state = ProjectsState {
        service,
        rate_limiter,
        create_rule,
    };

    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).patch(update_project),
        )
        .with_state(state)
}
