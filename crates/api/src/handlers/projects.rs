//! Handlers for the `/projects` resource.
//!
//! Project updates and deletions fan out to invoices; the resulting step
//! report is attached to the response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::cascade::CascadeReport;
use pxl_core::error::CoreError;
use pxl_core::types::DbId;
use pxl_db::models::project::{CreateProject, Project, UpdateProject};
use pxl_db::repositories::ProjectRepo;
use serde::Serialize;
use validator::Validate;

use crate::cascade::{after_project_delete, after_project_update, CascadeSummary};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for project updates: the updated row plus the cascade
/// step report.
#[derive(Debug, Serialize)]
pub struct ProjectWithCascade {
    #[serde(flatten)]
    pub project: Project,
    pub cascade: CascadeReport,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
///
/// After the update commits, title/amount changes are propagated to the
/// project's invoices, and a transition into COMPLETED auto-creates the
/// project's invoice if none exists yet.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectWithCascade>> {
    let before = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let after = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let cascade = after_project_update(&state.pool, &before, &after).await;

    Ok(Json(ProjectWithCascade {
        project: after,
        cascade,
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// After the delete commits, every invoice referencing the project is
/// removed.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<CascadeSummary>> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    let cascade = after_project_delete(&state.pool, id).await;

    Ok(Json(CascadeSummary {
        deleted: true,
        cascade,
    }))
}
