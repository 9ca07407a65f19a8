use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::components::{dtos as components_dtos, handlers as components_handlers};
use crate::features::projects::{dtos as projects_dtos, handlers as projects_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::profile_handler::get_me,
        // Projects
        projects_handlers::project_handler::list_projects,
        projects_handlers::project_handler::get_project,
        projects_handlers::project_handler::create_project,
        projects_handlers::project_handler::update_project,
        // Components
        components_handlers::component_handler::list_components,
        components_handlers::component_handler::get_component,
        components_handlers::component_handler::create_component,
        components_handlers::component_handler::update_component,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            // Users
            users_models::Tier,
            users_dtos::ProfileResponseDto,
            ApiResponse<users_dtos::ProfileResponseDto>,
            // Projects
            projects_dtos::CreateProjectDto,
            projects_dtos::UpdateProjectDto,
            projects_dtos::ProjectResponseDto,
            ApiResponse<Vec<projects_dtos::ProjectResponseDto>>,
            ApiResponse<projects_dtos::ProjectResponseDto>,
            // Components
            components_dtos::CreateComponentDto,
            components_dtos::UpdateComponentDto,
            components_dtos::ComponentResponseDto,
            ApiResponse<Vec<components_dtos::ComponentResponseDto>>,
            ApiResponse<components_dtos::ComponentResponseDto>,
        )
    ),
    tags(
        (name = "users", description = "Caller profile and tier"),
        (name = "projects", description = "Project management (quota- and rate-limit-gated)"),
        (name = "components", description = "UI components within a project"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "ForgeUI API",
        version = "0.1.0",
        description = "API documentation for ForgeUI",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
