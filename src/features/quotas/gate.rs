//! Tier-aware creation guards.
//!
//! The checks take an open connection so callers can run the count and the
//! subsequent INSERT inside one transaction: a failed create never leaves a
//! quota consumed, and two concurrent creates cannot both pass the count.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::quotas::policy::TierPolicy;
use crate::features::users::models::Tier;

/// Reject project creation once the owner's tier cap is reached.
pub async fn check_project_quota(conn: &mut PgConnection, user_id: Uuid, tier: Tier) -> Result<()> {
    let policy = TierPolicy::for_tier(tier);
    let Some(max) = policy.max_projects else {
        return Ok(());
    };

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count projects for quota check: {:?}", e);
                AppError::Database(e)
            })?;

    if !policy.allows_project(count) {
        return Err(AppError::QuotaExceeded(format!(
            "{:?} tier allows at most {} project{}",
            tier,
            max,
            if max == 1 { "" } else { "s" }
        )));
    }

    Ok(())
}

/// Reject component creation once the project owner's tier cap is reached.
///
/// The cap follows the project owner's tier, not the creator's: the quota
/// bounds the project as a resource, so a paid owner's project is never
/// capped by a demo collaborator.
pub async fn check_component_quota(
    conn: &mut PgConnection,
    project_id: Uuid,
    owner_tier: Tier,
) -> Result<()> {
    let policy = TierPolicy::for_tier(owner_tier);
    let Some(max) = policy.max_components_per_project else {
        return Ok(());
    };

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM components WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count components for quota check: {:?}", e);
                AppError::Database(e)
            })?;

    if !policy.allows_component(count) {
        return Err(AppError::QuotaExceeded(format!(
            "{:?} tier allows at most {} components per project",
            owner_tier, max
        )));
    }

    Ok(())
}
