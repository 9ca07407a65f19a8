use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::projects::models::Project;

/// Request DTO for creating a project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(
        length(min = 1, max = 60, message = "Slug must be 1-60 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Slug must be lowercase alphanumeric with hyphens"
        )
    )]
    pub slug: String,
}

/// Request DTO for updating a project
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub is_public: Option<bool>,
}

/// Response DTO for project
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub user_id: Uuid,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponseDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            user_id: p.user_id,
            is_public: p.is_public,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_dto_valid() {
        let dto = CreateProjectDto {
            name: "Design System".to_string(),
            slug: "design-system".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_project_dto_bad_slug() {
        let dto = CreateProjectDto {
            name: "Design System".to_string(),
            slug: "Design System".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_project_dto_empty_name() {
        let dto = CreateProjectDto {
            name: String::new(),
            slug: "design-system".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
