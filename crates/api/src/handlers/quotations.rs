//! Handlers for the `/quotations` resource.
//!
//! The `quote_id` is generated from the most recently created quotation's
//! identifier. That read-compute-write sequence is racy under concurrent
//! creators, so the unique index on `quote_id` backs a bounded retry loop.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Datelike;
use pxl_core::error::CoreError;
use pxl_core::ident::next_quote_id;
use pxl_core::types::DbId;
use pxl_db::models::quotation::{
    quotation_total, CreateQuotation, Quotation, QuotationStatus, UpdateQuotation,
};
use pxl_db::repositories::QuotationRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Attempts before giving up on a `quote_id` collision.
const MAX_ID_ATTEMPTS: u32 = 3;

/// POST /api/v1/quotations
///
/// The caller becomes the quotation's author; `quote_id` and the total are
/// filled in server-side.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateQuotation>,
) -> AppResult<(StatusCode, Json<Quotation>)> {
    input.validate()?;
    let total = quotation_total(&input.line_items);

    let mut attempt = 0;
    let quotation = loop {
        let prev = QuotationRepo::last_quote_id(&state.pool).await?;
        let quote_id = next_quote_id(prev.as_deref(), chrono::Utc::now().year());

        match QuotationRepo::create(&state.pool, &quote_id, Some(auth.user_id), total, &input)
            .await
        {
            Ok(quotation) => break quotation,
            Err(err) if pxl_db::is_unique_violation(&err) && attempt < MAX_ID_ATTEMPTS => {
                // A concurrent creator took this identifier; re-read and retry.
                attempt += 1;
                tracing::debug!(quote_id, attempt, "quote id collision, retrying");
            }
            Err(err) => return Err(err.into()),
        }
    };

    Ok((StatusCode::CREATED, Json(quotation)))
}

/// Query parameters for `GET /quotations`.
#[derive(Debug, Deserialize)]
pub struct ListQuotationsQuery {
    /// Restrict the listing to quotations in this status.
    pub status: Option<QuotationStatus>,
}

/// GET /api/v1/quotations
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListQuotationsQuery>,
) -> AppResult<Json<Vec<Quotation>>> {
    let quotations = match query.status {
        Some(status) => QuotationRepo::list_by_status(&state.pool, status).await?,
        None => QuotationRepo::list(&state.pool).await?,
    };
    Ok(Json(quotations))
}

/// GET /api/v1/quotations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Quotation>> {
    let quotation = QuotationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Quotation",
            id,
        }))?;
    Ok(Json(quotation))
}

/// PUT /api/v1/quotations/{id}
///
/// The total is recomputed whenever the line items change.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuotation>,
) -> AppResult<Json<Quotation>> {
    let total = input.line_items.as_deref().map(quotation_total);

    let quotation = QuotationRepo::update(&state.pool, id, &input, total)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Quotation",
            id,
        }))?;
    Ok(Json(quotation))
}

/// DELETE /api/v1/quotations/{id} (admin only)
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = QuotationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Quotation",
            id,
        }))
    }
}
