//! Handlers for the `/team` resource (marketing-site "about" content).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::payload::validate_embedded_image;
use pxl_core::types::DbId;
use pxl_db::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use pxl_db::repositories::TeamMemberRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/public/team
pub async fn public_list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// POST /api/v1/team
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    input.validate()?;
    if let Some(photo) = &input.photo {
        validate_embedded_image(photo)?;
    }
    let member = TeamMemberRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// GET /api/v1/team
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// GET /api/v1/team/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TeamMember>> {
    let member = TeamMemberRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    Ok(Json(member))
}

/// PUT /api/v1/team/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<Json<TeamMember>> {
    if let Some(photo) = &input.photo {
        validate_embedded_image(photo)?;
    }
    let member = TeamMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;
    Ok(Json(member))
}

/// DELETE /api/v1/team/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamMemberRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))
    }
}
