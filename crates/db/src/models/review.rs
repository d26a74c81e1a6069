//! Review entity model and DTOs (marketing-site testimonials).

use pxl_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A review row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub author: String,
    pub company: Option<String>,
    pub rating: i32,
    pub body: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub company: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    #[serde(default)]
    pub published: bool,
}

/// DTO for updating a review. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReview {
    pub author: Option<String>,
    pub company: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub body: Option<String>,
    pub published: Option<bool>,
}
