//! Photo gallery entity model and DTOs (marketing-site work showcase).

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A gallery row from the `photo_galleries` table.
///
/// `images` is a JSONB array of inline data URLs, each size-guarded at the
/// boundary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhotoGallery {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub images: Json<Vec<String>>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a gallery.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGallery {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub published: bool,
}

/// DTO for updating a gallery. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGallery {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub published: Option<bool>,
}
