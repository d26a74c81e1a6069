//! Handlers for the `/blog` resource. Deletion is admin-only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::types::DbId;
use pxl_db::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use pxl_db::repositories::BlogPostRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/public/blog -- published posts only.
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/public/blog/{slug} -- a published post by slug.
pub async fn public_get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "BlogPost",
                key: slug,
            })
        })?;
    Ok(Json(post))
}

/// POST /api/v1/blog
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    input.validate()?;
    let post = BlogPostRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/blog
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<BlogPost>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// GET /api/v1/blog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;
    Ok(Json(post))
}

/// PUT /api/v1/blog/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<Json<BlogPost>> {
    let post = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;
    Ok(Json(post))
}

/// DELETE /api/v1/blog/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = BlogPostRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))
    }
}
