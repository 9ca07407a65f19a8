use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Subscription tier gating feature limits
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "tier", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Demo,
    Free,
    Pro,
    Team,
}

impl Tier {
    pub fn is_demo(&self) -> bool {
        matches!(self, Tier::Demo)
    }
}

/// Database model for user
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub tier: Tier,
    pub created_at: DateTime<Utc>,
}
