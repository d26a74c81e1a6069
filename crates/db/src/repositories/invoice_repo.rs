//! Repository for the `invoices` table.

use chrono::Utc;
use pxl_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::invoice::{
    CreateInvoice, Invoice, InvoiceStatus, Payment, RecordPayment, UpdateInvoice,
};
use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, invoice_no, project_id, client_id, title, amount, paid_amount, \
                        payments, status, created_at, updated_at";

/// Provides CRUD operations for invoices plus the project-cascade writes.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (invoice_no, project_id, client_id, title, amount)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(&input.invoice_no)
            .bind(input.project_id)
            .bind(input.client_id)
            .bind(&input.title)
            .bind(input.amount)
            .fetch_one(pool)
            .await
    }

    /// Insert the auto-created invoice for a project that just reached
    /// COMPLETED, copying its title, amount, and client.
    pub async fn create_for_project(
        pool: &PgPool,
        project: &Project,
    ) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (project_id, client_id, title, amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(project.id)
            .bind(project.client_id)
            .bind(&project.title)
            .bind(project.amount)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all invoices, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices ORDER BY created_at DESC");
        sqlx::query_as::<_, Invoice>(&query).fetch_all(pool).await
    }

    /// List invoices referencing a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM invoices WHERE project_id = $1 ORDER BY created_at");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update an invoice. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                invoice_no = COALESCE($2, invoice_no),
                title = COALESCE($3, title),
                amount = COALESCE($4, amount),
                client_id = COALESCE($5, client_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(&input.invoice_no)
            .bind(&input.title)
            .bind(input.amount)
            .bind(input.client_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an invoice. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Append a payment, recompute `paid_amount`, and derive the status.
    ///
    /// Returns `None` if no invoice with the given `id` exists.
    pub async fn record_payment(
        pool: &PgPool,
        id: DbId,
        input: &RecordPayment,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let Some(invoice) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let mut payments = invoice.payments.0;
        payments.push(Payment {
            amount: input.amount,
            note: input.note.clone(),
            date: Utc::now(),
        });
        let paid_amount = invoice.paid_amount + input.amount;
        let status = InvoiceStatus::from_amounts(invoice.amount, paid_amount);

        let query = format!(
            "UPDATE invoices SET
                payments = $2,
                paid_amount = $3,
                status = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(Json(&payments))
            .bind(paid_amount)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    // -- Project cascade writes --------------------------------------------

    /// True if any invoice references the given project.
    pub async fn exists_for_project(pool: &PgPool, project_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM invoices WHERE project_id = $1)")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Copy a project's title and amount onto every invoice referencing it.
    /// Returns the number of invoices touched.
    pub async fn propagate_project_fields(
        pool: &PgPool,
        project_id: DbId,
        title: &str,
        amount: f64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE invoices SET title = $2, amount = $3, updated_at = NOW()
             WHERE project_id = $1",
        )
        .bind(project_id)
        .bind(title)
        .bind(amount)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete every invoice referencing a project. Returns the count removed.
    pub async fn delete_by_project(pool: &PgPool, project_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
