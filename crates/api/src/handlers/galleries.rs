//! Handlers for the `/galleries` resource (marketing-site work showcase).
//!
//! Deletion is admin-only; gallery images are inline data URLs and are
//! size-guarded on every write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::payload::validate_embedded_images;
use pxl_core::types::DbId;
use pxl_db::models::gallery::{CreateGallery, PhotoGallery, UpdateGallery};
use pxl_db::repositories::GalleryRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/public/galleries -- published galleries only.
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<PhotoGallery>>> {
    let galleries = GalleryRepo::list_published(&state.pool).await?;
    Ok(Json(galleries))
}

/// POST /api/v1/galleries
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateGallery>,
) -> AppResult<(StatusCode, Json<PhotoGallery>)> {
    input.validate()?;
    validate_embedded_images(input.images.iter().map(String::as_str))?;
    let gallery = GalleryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(gallery)))
}

/// GET /api/v1/galleries
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<PhotoGallery>>> {
    let galleries = GalleryRepo::list(&state.pool).await?;
    Ok(Json(galleries))
}

/// GET /api/v1/galleries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PhotoGallery>> {
    let gallery = GalleryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PhotoGallery",
            id,
        }))?;
    Ok(Json(gallery))
}

/// PUT /api/v1/galleries/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGallery>,
) -> AppResult<Json<PhotoGallery>> {
    if let Some(images) = &input.images {
        validate_embedded_images(images.iter().map(String::as_str))?;
    }
    let gallery = GalleryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PhotoGallery",
            id,
        }))?;
    Ok(Json(gallery))
}

/// DELETE /api/v1/galleries/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GalleryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PhotoGallery",
            id,
        }))
    }
}
