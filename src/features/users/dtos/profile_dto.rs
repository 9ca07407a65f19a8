use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::{Tier, User};

/// Response DTO for the caller's own profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub tier: Tier,
    /// Derived from tier, kept for dashboard compatibility
    pub is_demo: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            is_demo: user.tier.is_demo(),
            tier: user.tier,
            created_at: user.created_at,
        }
    }
}
