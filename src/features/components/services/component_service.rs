use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::components::dtos::{CreateComponentDto, UpdateComponentDto};
use crate::features::components::models::Component;
use crate::features::quotas::gate;
use crate::features::users::models::Tier;

/// Project row joined with its owner's tier, as seen by component operations
#[derive(Debug, FromRow)]
struct ProjectScope {
    user_id: Uuid,
    is_public: bool,
    owner_tier: Tier,
}

/// Service for component operations
pub struct ComponentService {
    pool: PgPool,
}

impl ComponentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List components of a project visible to the caller.
    ///
    /// Private projects of other users answer 404 rather than 403 so their
    /// existence is not leaked.
    pub async fn list_for_project(
        &self,
        caller_id: Uuid,
        project_id: Uuid,
    ) -> Result<Vec<Component>> {
        let scope = sqlx::query_as::<_, ProjectScope>(
            r#"
            SELECT p.user_id, p.is_public, u.tier AS owner_tier
            FROM projects p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#,
        )
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve project: {:?}", e);
            AppError::Database(e)
        })?;

        let scope = scope.ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
        if scope.user_id != caller_id && !scope.is_public {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        let components = sqlx::query_as::<_, Component>(
            r#"
            SELECT id, name, code, meta, project_id, is_public, created_at
            FROM components
            WHERE project_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list components: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(components)
    }

    /// Get one component, subject to project visibility
    pub async fn get(&self, caller_id: Uuid, id: Uuid) -> Result<Component> {
        let component = sqlx::query_as::<_, Component>(
            r#"
            SELECT c.id, c.name, c.code, c.meta, c.project_id, c.is_public, c.created_at
            FROM components c
            JOIN projects p ON p.id = c.project_id
            WHERE c.id = $1 AND (p.user_id = $2 OR p.is_public)
            "#,
        )
        .bind(id)
        .bind(caller_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get component: {:?}", e);
            AppError::Database(e)
        })?;

        component.ok_or_else(|| AppError::NotFound("Component not found".to_string()))
    }

    /// Create a component in a caller-visible project.
    ///
    /// The quota is evaluated against the project owner's tier inside one
    /// transaction; the project row is locked so concurrent creates cannot
    /// both pass the count.
    pub async fn create(&self, creator_id: Uuid, dto: CreateComponentDto) -> Result<Component> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let scope = sqlx::query_as::<_, ProjectScope>(
            r#"
            SELECT p.user_id, p.is_public, u.tier AS owner_tier
            FROM projects p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            FOR UPDATE OF p
            "#,
        )
        .bind(dto.project_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to resolve project: {:?}", e);
            AppError::Database(e)
        })?;

        let scope = scope.ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
        if scope.user_id != creator_id && !scope.is_public {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        gate::check_component_quota(&mut tx, dto.project_id, scope.owner_tier).await?;

        let meta = dto.meta.unwrap_or_else(|| serde_json::json!({}));
        let component = sqlx::query_as::<_, Component>(
            r#"
            INSERT INTO components (name, code, meta, project_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, code, meta, project_id, is_public, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.code)
        .bind(&meta)
        .bind(dto.project_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create component: {:?}", e);
            AppError::Database(e)
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            component_id = %component.id,
            project_id = %component.project_id,
            creator_id = %creator_id,
            "Component created"
        );

        Ok(component)
    }

    /// Update code/visibility of a component in a caller-owned project
    pub async fn update(
        &self,
        caller_id: Uuid,
        id: Uuid,
        dto: UpdateComponentDto,
    ) -> Result<Component> {
        let component = sqlx::query_as::<_, Component>(
            r#"
            UPDATE components c
            SET code = COALESCE($1, c.code),
                is_public = COALESCE($2, c.is_public)
            FROM projects p
            WHERE c.id = $3 AND p.id = c.project_id AND p.user_id = $4
            RETURNING c.id, c.name, c.code, c.meta, c.project_id, c.is_public, c.created_at
            "#,
        )
        .bind(dto.code)
        .bind(dto.is_public)
        .bind(id)
        .bind(caller_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update component: {:?}", e);
            AppError::Database(e)
        })?;

        component.ok_or_else(|| AppError::NotFound("Component not found".to_string()))
    }
}
