use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::projects::dtos::{CreateProjectDto, UpdateProjectDto};
use crate::features::projects::models::Project;
use crate::features::quotas::gate;
use crate::features::users::models::Tier;

/// Service for project operations
pub struct ProjectService {
    pool: PgPool,
}

impl ProjectService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's projects, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, slug, user_id, is_public, created_at
            FROM projects
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list projects: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(projects)
    }

    /// Get one project owned by the caller
    pub async fn get_owned(&self, user_id: Uuid, id: Uuid) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, name, slug, user_id, is_public, created_at
            FROM projects
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get project: {:?}", e);
            AppError::Database(e)
        })?;

        project.ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Create a project for the caller.
    ///
    /// Tier lookup, quota count and insert share one transaction so the
    /// quota cannot be oversubscribed by concurrent creates.
    pub async fn create(&self, user_id: Uuid, dto: CreateProjectDto) -> Result<Project> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // FOR UPDATE serializes concurrent creates by the same user, so the
        // quota count below cannot be read stale.
        let tier = sqlx::query_scalar::<_, Tier>("SELECT tier FROM users WHERE id = $1 FOR UPDATE")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to resolve user tier: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

        gate::check_project_quota(&mut tx, user_id, tier).await?;

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, slug, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, user_id, is_public, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|d| d.is_unique_violation())
            {
                AppError::Conflict(format!("A project with slug '{}' already exists", dto.slug))
            } else {
                tracing::error!("Failed to create project: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            project_id = %project.id,
            user_id = %user_id,
            slug = %project.slug,
            "Project created"
        );

        Ok(project)
    }

    /// Update name/visibility of a caller-owned project
    pub async fn update(&self, user_id: Uuid, id: Uuid, dto: UpdateProjectDto) -> Result<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET name = COALESCE($1, name),
                is_public = COALESCE($2, is_public)
            WHERE id = $3 AND user_id = $4
            RETURNING id, name, slug, user_id, is_public, created_at
            "#,
        )
        .bind(dto.name)
        .bind(dto.is_public)
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update project: {:?}", e);
            AppError::Database(e)
        })?;

        project.ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}
