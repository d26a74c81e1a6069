//! Lead entity model and DTOs.

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lead_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

/// A lead row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub assigned_to: Option<DbId>,
    pub assigned_to_name: Option<String>,
    pub status: LeadStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a lead (marketing-site contact form or admin entry).
///
/// A lead must carry at least one contact channel; that invariant is
/// checked in the handler since `validator` cannot express it per-field.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLead {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
}

/// DTO for updating a lead's pipeline status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLead {
    pub status: Option<LeadStatus>,
    pub message: Option<String>,
}

/// DTO for assigning a lead to a user. `user_id: null` unassigns.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignLead {
    pub user_id: Option<DbId>,
}

/// Summary returned by a batch lead submission.
#[derive(Debug, Clone, Serialize)]
pub struct BatchInsertSummary {
    pub inserted: usize,
    pub skipped: usize,
}
