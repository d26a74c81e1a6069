//! Project entity model and DTOs.

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// An entry in a project's embedded assignee list.
///
/// Assignees are stored inline as JSONB rather than through a join table;
/// removing a deleted user from these lists is a cascade concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub client_id: Option<DbId>,
    pub status: ProjectStatus,
    pub assignees: Json<Vec<Assignee>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub client_id: Option<DbId>,
    /// Defaults to PLANNING if omitted.
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub client_id: Option<DbId>,
    pub status: Option<ProjectStatus>,
    pub assignees: Option<Vec<Assignee>>,
}
