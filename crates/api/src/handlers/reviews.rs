//! Handlers for the `/reviews` resource (marketing-site testimonials).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::types::DbId;
use pxl_db::models::review::{CreateReview, Review, UpdateReview};
use pxl_db::repositories::ReviewRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/public/reviews -- published reviews only.
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_published(&state.pool).await?;
    Ok(Json(reviews))
}

/// POST /api/v1/reviews
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    input.validate()?;
    let review = ReviewRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/reviews -- every review, published or not.
pub async fn list(State(state): State<AppState>, _auth: AuthUser) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list(&state.pool).await?;
    Ok(Json(reviews))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;
    Ok(Json(review))
}

/// PUT /api/v1/reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    input.validate()?;
    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;
    Ok(Json(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))
    }
}
