use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::config::RateLimitRule;
use crate::features::components::handlers::component_handler::{
    create_component, get_component, list_components, update_component, ComponentsState,
};
use crate::features::components::services::ComponentService;
use crate::features::rate_limits::RateLimitService;

/// Create routes for the components feature
pub fn routes(
    service: Arc<ComponentService>,
    rate_limiter: Arc<RateLimitService>,
    create_rule: RateLimitRule,
) -> Router {
    let state = ComponentsState {
        service,
        rate_limiter,
        create_rule,
    };

    Router::new()
        .route(
            "/api/components",
            get(list_components).post(create_component),
        )
        .route(
            "/api/components/{id}",
            get(get_component).patch(update_component),
        )
        .with_state(state)
}
