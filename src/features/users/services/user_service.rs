use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Service for user profile lookups
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by id. Authenticated callers without a row are treated as
    /// unauthorized rather than missing, so a stale token cannot probe ids.
    pub async fn get_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, tier, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {:?}", e);
            AppError::Database(e)
        })?;

        user.ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))
    }
}
