use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::components::models::Component;

/// Request DTO for creating a component
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComponentDto {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,

    pub project_id: Uuid,

    /// Free-form metadata (props, preview settings); defaults to `{}`
    pub meta: Option<serde_json::Value>,
}

/// Request DTO for updating a component
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateComponentDto {
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: Option<String>,

    pub is_public: Option<bool>,
}

/// Response DTO for component
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComponentResponseDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub meta: serde_json::Value,
    pub project_id: Uuid,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Component> for ComponentResponseDto {
    fn from(c: Component) -> Self {
        Self {
            id: c.id,
            name: c.name,
            code: c.code,
            meta: c.meta,
            project_id: c.project_id,
            is_public: c.is_public,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_component_dto_valid() {
        let dto = CreateComponentDto {
            name: "Button".to_string(),
            code: "export const Button = () => <button />;".to_string(),
            project_id: Uuid::new_v4(),
            meta: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_component_dto_empty_code() {
        let dto = CreateComponentDto {
            name: "Button".to_string(),
            code: String::new(),
            project_id: Uuid::new_v4(),
            meta: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_component_dto_partial() {
        let dto = UpdateComponentDto {
            code: None,
            is_public: Some(true),
        };
        assert!(dto.validate().is_ok());
    }
}
