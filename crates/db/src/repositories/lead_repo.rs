//! Repository for the `leads` table.

use pxl_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::{CreateLead, Lead, UpdateLead};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, message, source, assigned_to, assigned_to_name, \
                        status, created_at, updated_at";

/// Provides CRUD operations for leads plus the dedup lookup and the
/// user-deletion cascade write.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, message, source)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.message)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// Find an existing lead sharing the given phone OR email.
    ///
    /// A `None` channel never matches; two leads with no email and distinct
    /// phones are not duplicates of each other.
    pub async fn find_duplicate(
        pool: &PgPool,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE ($1::text IS NOT NULL AND phone = $1)
                OR ($2::text IS NOT NULL AND email = $2)
             LIMIT 1"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(phone)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a lead by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all leads, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC");
        sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await
    }

    /// List leads assigned to a specific user, most recently created first.
    pub async fn list_assigned_to(pool: &PgPool, user_id: DbId) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads WHERE assigned_to = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a lead. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                status = COALESCE($2, status),
                message = COALESCE($3, message),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(input.status)
            .bind(&input.message)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear a lead's assignment. Passing `None` for both fields
    /// unassigns the lead.
    pub async fn set_assignment(
        pool: &PgPool,
        id: DbId,
        user_id: Option<DbId>,
        user_name: Option<&str>,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                assigned_to = $2,
                assigned_to_name = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(user_id)
            .bind(user_name)
            .fetch_optional(pool)
            .await
    }

    /// Clear the assignment on every lead assigned to a user. Returns the
    /// number of leads touched.
    pub async fn unassign_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE leads SET assigned_to = NULL, assigned_to_name = NULL, updated_at = NOW()
             WHERE assigned_to = $1",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a lead. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
