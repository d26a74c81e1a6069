//! Expense entity model and DTOs.

use chrono::NaiveDate;
use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An expense row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub title: String,
    pub category: Option<String>,
    pub amount: f64,
    pub incurred_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new expense.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExpense {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "amount must not be negative"))]
    pub amount: f64,
    pub incurred_on: NaiveDate,
    pub notes: Option<String>,
}

/// DTO for updating an existing expense. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub title: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub incurred_on: Option<NaiveDate>,
    pub notes: Option<String>,
}
