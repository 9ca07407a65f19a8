use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Counter row for one (user, ip, action) bucket.
///
/// `window_start` marks when the current window began; the window is reset in
/// place once expired, so each bucket keeps exactly one row.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct RateLimitRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub ip: String,
    pub action: String,
    pub count: i64,
    pub window_start: DateTime<Utc>,
}
