//! Repository for the `projects` table.

use pxl_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectStatus, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, amount, client_id, status, assignees, created_at, updated_at";

/// Provides CRUD operations for projects plus the assignee-list rewrite
/// used by the user-deletion cascade.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let status = input.status.unwrap_or(ProjectStatus::Planning);
        let query = format!(
            "INSERT INTO projects (title, description, amount, client_id, status, assignees)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.client_id)
            .bind(status)
            .bind(Json(&input.assignees))
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                amount = COALESCE($4, amount),
                client_id = COALESCE($5, client_id),
                status = COALESCE($6, status),
                assignees = COALESCE($7, assignees),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.amount)
            .bind(input.client_id)
            .bind(input.status)
            .bind(input.assignees.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a project. Returns `true` if a row was removed.
    ///
    /// Dependent invoices are cleaned up by the caller's cascade, not here.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove `user_id` from every project's embedded assignee list,
    /// rewriting the JSONB array in place. Returns the number of projects
    /// touched.
    pub async fn strip_assignee(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects
             SET assignees = (
                 SELECT COALESCE(jsonb_agg(entry), '[]'::jsonb)
                 FROM jsonb_array_elements(assignees) AS entry
                 WHERE (entry->>'id')::bigint <> $1
             ),
             updated_at = NOW()
             WHERE assignees @> jsonb_build_array(jsonb_build_object('id', $1))",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
