//! Handlers for the `/invoices` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pxl_core::error::CoreError;
use pxl_core::types::DbId;
use pxl_db::models::invoice::{CreateInvoice, Invoice, RecordPayment, UpdateInvoice};
use pxl_db::repositories::InvoiceRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /invoices`.
#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    /// Restrict the listing to invoices referencing this project.
    pub project_id: Option<DbId>,
}

/// POST /api/v1/invoices
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateInvoice>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    input.validate()?;
    let invoice = InvoiceRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /api/v1/invoices
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListInvoicesQuery>,
) -> AppResult<Json<Vec<Invoice>>> {
    let invoices = match query.project_id {
        Some(project_id) => InvoiceRepo::list_by_project(&state.pool, project_id).await?,
        None => InvoiceRepo::list(&state.pool).await?,
    };
    Ok(Json(invoices))
}

/// GET /api/v1/invoices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// PUT /api/v1/invoices/{id}
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<Json<Invoice>> {
    let invoice = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// POST /api/v1/invoices/{id}/payments
///
/// Appends a payment, bumps `paid_amount`, and re-derives the status
/// (DRAFT / PARTIAL / PAID).
pub async fn record_payment(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RecordPayment>,
) -> AppResult<Json<Invoice>> {
    input.validate()?;
    let invoice = InvoiceRepo::record_payment(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    Ok(Json(invoice))
}

/// DELETE /api/v1/invoices/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))
    }
}
