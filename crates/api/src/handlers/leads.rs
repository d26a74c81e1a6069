//! Handlers for the `/leads` resource.
//!
//! Lead submission is public (marketing-site contact form) and deduplicates
//! on phone or email: a single duplicate submission conflicts with 409,
//! while a batch silently drops duplicates and reports the inserted count.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::types::DbId;
use pxl_db::models::lead::{AssignLead, BatchInsertSummary, CreateLead, Lead, UpdateLead};
use pxl_db::repositories::{LeadRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Body accepted by the public submission endpoint: a single lead or a
/// batch of leads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LeadPayload {
    Batch(Vec<CreateLead>),
    Single(CreateLead),
}

/// Response from the public submission endpoint.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    Created(Lead),
    Batch(BatchInsertSummary),
}

/// A lead must carry at least one contact channel for dedup to be
/// meaningful.
fn validate_submission(input: &CreateLead) -> Result<(), AppError> {
    input.validate()?;
    if input.email.is_none() && input.phone.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "A lead requires an email or a phone number".into(),
        )));
    }
    Ok(())
}

/// POST /api/public/leads
///
/// Single submission: rejected with 409 if an existing lead shares the
/// phone or email. Batch submission: duplicates are dropped and only the
/// insert/skip counts are reported.
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<LeadPayload>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    match payload {
        LeadPayload::Single(input) => {
            validate_submission(&input)?;

            let duplicate =
                LeadRepo::find_duplicate(&state.pool, input.phone.as_deref(), input.email.as_deref())
                    .await?;
            if duplicate.is_some() {
                return Err(AppError::Core(CoreError::Conflict(
                    "A lead with this phone or email already exists".into(),
                )));
            }

            let lead = LeadRepo::create(&state.pool, &input).await?;
            Ok((StatusCode::CREATED, Json(SubmitResponse::Created(lead))))
        }
        LeadPayload::Batch(inputs) => {
            let mut inserted = 0;
            let mut skipped = 0;

            // Items are checked one at a time, so a duplicate later in the
            // batch is caught against the rows inserted before it.
            for input in &inputs {
                validate_submission(input)?;

                let duplicate = LeadRepo::find_duplicate(
                    &state.pool,
                    input.phone.as_deref(),
                    input.email.as_deref(),
                )
                .await?;
                if duplicate.is_some() {
                    skipped += 1;
                    continue;
                }

                LeadRepo::create(&state.pool, input).await?;
                inserted += 1;
            }

            Ok((
                StatusCode::CREATED,
                Json(SubmitResponse::Batch(BatchInsertSummary { inserted, skipped })),
            ))
        }
    }
}

/// GET /api/v1/leads
///
/// Admins see every lead; other callers only see leads assigned to them.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Lead>>> {
    let leads = if auth.is_admin() {
        LeadRepo::list(&state.pool).await?
    } else {
        LeadRepo::list_assigned_to(&state.pool, auth.user_id).await?
    };
    Ok(Json(leads))
}

/// GET /api/v1/leads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// PATCH /api/v1/leads/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<Lead>> {
    let lead = LeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// PUT /api/v1/leads/{id}/assignment
///
/// Assign the lead to a user (`{"user_id": 7}`) or clear the assignment
/// (`{"user_id": null}`). The assignee's display name is denormalized onto
/// the lead.
pub async fn assign(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AssignLead>,
) -> AppResult<Json<Lead>> {
    let assignee = match input.user_id {
        Some(user_id) => {
            let user = UserRepo::find_by_id(&state.pool, user_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "User",
                    id: user_id,
                }))?;
            Some((user.id, user.name))
        }
        None => None,
    };

    let (user_id, user_name) = match &assignee {
        Some((id, name)) => (Some(*id), Some(name.as_str())),
        None => (None, None),
    };

    let lead = LeadRepo::set_assignment(&state.pool, id, user_id, user_name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Lead", id }))?;
    Ok(Json(lead))
}

/// DELETE /api/v1/leads/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = LeadRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Lead", id }))
    }
}
