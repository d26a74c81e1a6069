//! Invoice entity model and DTOs.

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invoice_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Partial,
    Paid,
}

impl InvoiceStatus {
    /// Derive the status from the invoice total and the amount paid so far.
    pub fn from_amounts(total: f64, paid: f64) -> Self {
        if paid <= 0.0 {
            InvoiceStatus::Draft
        } else if paid < total {
            InvoiceStatus::Partial
        } else {
            InvoiceStatus::Paid
        }
    }
}

/// A payment recorded against an invoice (embedded, not a separate table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub amount: f64,
    pub note: Option<String>,
    pub date: Timestamp,
}

/// An invoice row from the `invoices` table.
///
/// `project_id` is a plain column; invoices referencing a deleted project
/// are removed by the cascade, not by the store.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub invoice_no: Option<String>,
    pub project_id: Option<DbId>,
    pub client_id: Option<DbId>,
    pub title: String,
    pub amount: f64,
    pub paid_amount: f64,
    pub payments: Json<Vec<Payment>>,
    pub status: InvoiceStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invoice directly (as opposed to auto-creation
/// from a completed project).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoice {
    pub invoice_no: Option<String>,
    pub project_id: Option<DbId>,
    pub client_id: Option<DbId>,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
}

/// DTO for updating an existing invoice. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    pub invoice_no: Option<String>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub client_id: Option<DbId>,
}

/// DTO for recording a payment against an invoice.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPayment {
    #[validate(range(min = 0.01, message = "payment amount must be positive"))]
    pub amount: f64,
    pub note: Option<String>,
}
