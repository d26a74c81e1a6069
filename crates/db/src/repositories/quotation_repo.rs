//! Repository for the `quotations` table.

use pxl_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::quotation::{CreateQuotation, Quotation, QuotationStatus, UpdateQuotation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, quote_id, client_id, author_id, line_items, services, notes, total, \
                        status, created_at, updated_at";

/// Provides CRUD operations for quotations plus the author-clearing
/// cascade write and the last-identifier lookup.
pub struct QuotationRepo;

impl QuotationRepo {
    /// Insert a new quotation with a server-generated `quote_id`.
    ///
    /// Fails with a unique violation if a concurrent creator already took
    /// the identifier; the caller retries with a fresh one.
    pub async fn create(
        pool: &PgPool,
        quote_id: &str,
        author_id: Option<DbId>,
        total: f64,
        input: &CreateQuotation,
    ) -> Result<Quotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO quotations (quote_id, client_id, author_id, line_items, services, notes, total)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quotation>(&query)
            .bind(quote_id)
            .bind(input.client_id)
            .bind(author_id)
            .bind(Json(&input.line_items))
            .bind(Json(&input.services))
            .bind(&input.notes)
            .bind(total)
            .fetch_one(pool)
            .await
    }

    /// The `quote_id` of the most recently created quotation, if any.
    pub async fn last_quote_id(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT quote_id FROM quotations ORDER BY id DESC LIMIT 1")
            .fetch_optional(pool)
            .await
    }

    /// Find a quotation by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotations WHERE id = $1");
        sqlx::query_as::<_, Quotation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all quotations, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Quotation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quotations ORDER BY created_at DESC");
        sqlx::query_as::<_, Quotation>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a quotation. Only non-`None` fields in `input` are applied;
    /// `total` is recomputed by the caller when the line items change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuotation,
        total: Option<f64>,
    ) -> Result<Option<Quotation>, sqlx::Error> {
        let query = format!(
            "UPDATE quotations SET
                client_id = COALESCE($2, client_id),
                line_items = COALESCE($3, line_items),
                services = COALESCE($4, services),
                notes = COALESCE($5, notes),
                status = COALESCE($6, status),
                total = COALESCE($7, total),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quotation>(&query)
            .bind(id)
            .bind(input.client_id)
            .bind(input.line_items.as_ref().map(Json))
            .bind(input.services.as_ref().map(Json))
            .bind(&input.notes)
            .bind(input.status)
            .bind(total)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a quotation. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Unset `author_id` on every quotation authored by a user. Returns the
    /// number of quotations touched.
    pub async fn clear_author(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE quotations SET author_id = NULL, updated_at = NOW() WHERE author_id = $1",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// List quotations filtered by status.
    pub async fn list_by_status(
        pool: &PgPool,
        status: QuotationStatus,
    ) -> Result<Vec<Quotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quotations WHERE status = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Quotation>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }
}
