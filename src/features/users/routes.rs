use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers::profile_handler;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/me", get(profile_handler::get_me))
        .with_state(service)
}
