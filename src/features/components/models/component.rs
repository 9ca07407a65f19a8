use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for component (a code snippet with metadata)
#[derive(Debug, Clone, FromRow)]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub meta: serde_json::Value,
    pub project_id: Uuid,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}
