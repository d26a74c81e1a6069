//! Repository for the `photo_galleries` table.

use pxl_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, PhotoGallery, UpdateGallery};

const COLUMNS: &str = "id, title, description, images, published, created_at, updated_at";

/// Provides CRUD operations for photo galleries.
pub struct GalleryRepo;

impl GalleryRepo {
    pub async fn create(pool: &PgPool, input: &CreateGallery) -> Result<PhotoGallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO photo_galleries (title, description, images, published)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoGallery>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.images))
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoGallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_galleries WHERE id = $1");
        sqlx::query_as::<_, PhotoGallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PhotoGallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photo_galleries ORDER BY created_at DESC");
        sqlx::query_as::<_, PhotoGallery>(&query)
            .fetch_all(pool)
            .await
    }

    /// List only published galleries (marketing-site surface).
    pub async fn list_published(pool: &PgPool) -> Result<Vec<PhotoGallery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photo_galleries WHERE published ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PhotoGallery>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<PhotoGallery>, sqlx::Error> {
        let query = format!(
            "UPDATE photo_galleries SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                images = COALESCE($4, images),
                published = COALESCE($5, published),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhotoGallery>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.images.as_ref().map(Json))
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM photo_galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
