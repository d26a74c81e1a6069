//! Blog post entity model and DTOs.

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub cover_image: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post. The slug is unique-indexed.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogPost {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: String,
    pub body: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// DTO for updating a blog post. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub cover_image: Option<String>,
    pub published: Option<bool>,
}
