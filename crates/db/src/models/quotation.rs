//! Quotation entity model and DTOs.

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "quotation_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Converted,
}

/// A line item embedded in a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// A quotation row from the `quotations` table.
///
/// `quote_id` is the human-readable sequential identifier (`PXL-YYYY-NNN`),
/// unique-indexed so concurrent creators cannot persist duplicates.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quotation {
    pub id: DbId,
    pub quote_id: String,
    pub client_id: Option<DbId>,
    pub author_id: Option<DbId>,
    pub line_items: Json<Vec<LineItem>>,
    pub services: Json<Vec<String>>,
    pub notes: Option<String>,
    pub total: f64,
    pub status: QuotationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a quotation. The `quote_id`, author, and total are
/// filled in server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuotation {
    pub client_id: Option<DbId>,
    #[validate(length(min = 1, message = "at least one line item is required"))]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub services: Vec<String>,
    pub notes: Option<String>,
}

/// DTO for updating a quotation. All fields are optional; the total is
/// recomputed whenever the line items change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuotation {
    pub client_id: Option<DbId>,
    pub line_items: Option<Vec<LineItem>>,
    pub services: Option<Vec<String>>,
    pub notes: Option<String>,
    pub status: Option<QuotationStatus>,
}

/// Sum of line-item subtotals.
pub fn quotation_total(line_items: &[LineItem]) -> f64 {
    line_items.iter().map(LineItem::subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_line_items() {
        let items = vec![
            LineItem {
                description: "Design".into(),
                quantity: 2.0,
                unit_price: 500.0,
            },
            LineItem {
                description: "Development".into(),
                quantity: 10.0,
                unit_price: 120.0,
            },
        ];
        assert_eq!(quotation_total(&items), 2200.0);
    }

    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(quotation_total(&[]), 0.0);
    }
}
