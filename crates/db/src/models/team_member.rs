//! Team member entity model and DTOs (marketing-site "about" content).

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A team member row from the `team_members` table.
///
/// `photo` is an inline data URL, size-guarded at the boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamMember {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a team member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub sort_order: Option<i32>,
}
