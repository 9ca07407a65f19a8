use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::config::RateLimitRule;
use crate::core::error::{AppError, Result};
use crate::features::rate_limits::models::RateLimitRecord;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    /// Calls left in the current window (0 when rejected)
    pub remaining: i64,
    /// Time until the current window ends
    pub retry_after: Duration,
}

impl RateLimitDecision {
    fn evaluate(
        count: i64,
        window_start: DateTime<Utc>,
        rule: &RateLimitRule,
        now: DateTime<Utc>,
    ) -> Self {
        let window =
            chrono::Duration::from_std(rule.window).unwrap_or_else(|_| chrono::Duration::zero());
        let retry_after = (window_start + window - now).to_std().unwrap_or_default();

        Self {
            allowed: count <= rule.limit,
            remaining: (rule.limit - count).max(0),
            retry_after,
        }
    }
}

/// Trailing-window rate limiter backed by the `rate_limits` table.
///
/// Each check is a single upsert keyed on (user, ip, action): an expired
/// window is reset to count = 1, an active one is incremented. The increment
/// is unconditional so the admission decision (`count <= limit`) is taken
/// from the row the database actually wrote; concurrent callers serialize on
/// the unique row and at most `limit` of them can observe an admitted count.
/// Rejected calls never move `window_start`, so over-limit traffic cannot
/// extend its own window.
pub struct RateLimitService {
    pool: PgPool,
}

impl RateLimitService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one call for the subject and report whether it is admitted.
    pub async fn check(
        &self,
        user_id: Option<Uuid>,
        ip: &str,
        action: &str,
        rule: &RateLimitRule,
    ) -> Result<RateLimitDecision> {
        let now = Utc::now();
        let window =
            chrono::Duration::from_std(rule.window).unwrap_or_else(|_| chrono::Duration::zero());
        let cutoff = now - window;

        let record = sqlx::query_as::<_, RateLimitRecord>(
            r#"
            INSERT INTO rate_limits (user_id, ip, action, count, window_start)
            VALUES ($1, $2, $3, 1, $4)
            ON CONFLICT (user_id, ip, action) DO UPDATE
            SET count = CASE
                    WHEN rate_limits.window_start < $5 THEN 1
                    ELSE rate_limits.count + 1
                END,
                window_start = CASE
                    WHEN rate_limits.window_start < $5 THEN $4
                    ELSE rate_limits.window_start
                END
            RETURNING id, user_id, ip, action, count, window_start
            "#,
        )
        .bind(user_id)
        .bind(ip)
        .bind(action)
        .bind(now)
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upsert rate limit counter: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(RateLimitDecision::evaluate(
            record.count,
            record.window_start,
            rule,
            now,
        ))
    }

    /// Like [`check`](Self::check), but maps a rejection to the 429 error
    /// carrying the window's remaining time.
    pub async fn enforce(
        &self,
        user_id: Option<Uuid>,
        ip: &str,
        action: &str,
        rule: &RateLimitRule,
    ) -> Result<()> {
        let decision = self.check(user_id, ip, action, rule).await?;

        if !decision.allowed {
            tracing::warn!(
                user_id = ?user_id,
                ip = %ip,
                action = %action,
                retry_after_secs = decision.retry_after.as_secs(),
                "Rate limit exceeded"
            );
            return Err(AppError::RateLimitExceeded {
                message: "Rate limit exceeded".to_string(),
                retry_after_secs: decision.retry_after.as_secs().max(1),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;

    fn rule(limit: i64, window_secs: u64) -> RateLimitRule {
        RateLimitRule {
            limit,
            window: Duration::from_secs(window_secs),
        }
    }

    #[test]
    fn test_under_limit_allowed() {
        let now = Utc::now();
        let decision = RateLimitDecision::evaluate(3, now, &rule(5, 60), now);

        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
    }

    #[test]
    fn test_limit_th_call_allowed() {
        let now = Utc::now();
        let decision = RateLimitDecision::evaluate(5, now, &rule(5, 60), now);

        assert!(decision.allowed);
        assert_eq!(decision.remaining, 0);
    }

    #[test]
    fn test_over_limit_rejected_with_retry_after() {
        let now = Utc::now();
        let window_start = now - chrono::Duration::seconds(20);
        let decision = RateLimitDecision::evaluate(6, window_start, &rule(5, 60), now);

        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
        // 60s window, 20s elapsed: about 40s left
        assert!(decision.retry_after >= Duration::from_secs(39));
        assert!(decision.retry_after <= Duration::from_secs(40));
    }

    #[test]
    fn test_retry_after_clamped_at_window_end() {
        let now = Utc::now();
        let window_start = now - chrono::Duration::seconds(120);
        let decision = RateLimitDecision::evaluate(6, window_start, &rule(5, 60), now);

        assert_eq!(decision.retry_after, Duration::ZERO);
    }

    // The tests below exercise the real upsert and need a live PostgreSQL
    // reachable via DATABASE_URL. Run them with `cargo test -- --ignored`.
    // Anonymous subjects (user_id = NULL) avoid the users FK and a fresh ip
    // per run keeps buckets disjoint.

    async fn db_service() -> RateLimitService {
        let url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set for database-backed tests");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&url)
            .await
            .expect("failed to connect to DATABASE_URL");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations failed");
        RateLimitService::new(pool)
    }

    fn fresh_ip() -> String {
        format!("test-{}", Uuid::new_v4())
    }

    #[tokio::test]
    #[ignore]
    async fn test_expired_window_resets_counter() {
        let service = db_service().await;
        let ip = fresh_ip();
        let r = rule(2, 1);

        assert!(service.check(None, &ip, "publish", &r).await.unwrap().allowed);
        assert!(service.check(None, &ip, "publish", &r).await.unwrap().allowed);
        assert!(!service.check(None, &ip, "publish", &r).await.unwrap().allowed);

        tokio::time::sleep(Duration::from_millis(1100)).await;

        let decision = service.check(None, &ip, "publish", &r).await.unwrap();
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }

    #[tokio::test]
    #[ignore]
    async fn test_actions_have_independent_buckets() {
        let service = db_service().await;
        let ip = fresh_ip();
        let r = rule(1, 60);

        assert!(service
            .check(None, &ip, "create-project", &r)
            .await
            .unwrap()
            .allowed);
        assert!(!service
            .check(None, &ip, "create-project", &r)
            .await
            .unwrap()
            .allowed);

        // Exhausting one action leaves the other untouched
        assert!(service
            .check(None, &ip, "create-component", &r)
            .await
            .unwrap()
            .allowed);
    }

    #[tokio::test]
    #[ignore]
    async fn test_concurrent_calls_admit_exactly_limit() {
        let service = Arc::new(db_service().await);
        let ip = fresh_ip();
        let r = rule(5, 60);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = Arc::clone(&service);
            let ip = ip.clone();
            handles.push(tokio::spawn(async move {
                service.check(None, &ip, "publish", &r).await.unwrap()
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap().allowed {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 5);
    }
}
