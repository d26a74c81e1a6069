//! HTTP-level integration tests for quotations: sequential identifier
//! generation, total computation, and the admin-only delete.

mod common;

use axum::http::StatusCode;
use chrono::Datelike;
use common::{admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth, staff_token};
use sqlx::PgPool;

async fn create_quotation(
    pool: &PgPool,
    token: &str,
    body: serde_json::Value,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/quotations", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn simple_items() -> serde_json::Value {
    serde_json::json!([{"description": "Design sprint", "quantity": 2.0, "unit_price": 800.0}])
}

// ---------------------------------------------------------------------------
// Sequential identifiers
// ---------------------------------------------------------------------------

/// Quote ids count up from 001 within the current year, preserving
/// zero-padding.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_quote_ids_are_sequential(pool: PgPool) {
    let token = admin_token(&pool).await;
    let year = chrono::Utc::now().year();

    let first = create_quotation(&pool, &token, serde_json::json!({"line_items": simple_items()}))
        .await;
    assert_eq!(first["quote_id"], format!("PXL-{year}-001"));

    let second =
        create_quotation(&pool, &token, serde_json::json!({"line_items": simple_items()})).await;
    assert_eq!(second["quote_id"], format!("PXL-{year}-002"));

    let third =
        create_quotation(&pool, &token, serde_json::json!({"line_items": simple_items()})).await;
    assert_eq!(third["quote_id"], format!("PXL-{year}-003"));
}

/// The total is computed server-side from the line items, and the caller
/// becomes the author.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_total_and_author_are_server_side(pool: PgPool) {
    let token = admin_token(&pool).await;

    let quotation = create_quotation(
        &pool,
        &token,
        serde_json::json!({
            "line_items": [
                {"description": "Design", "quantity": 2.0, "unit_price": 500.0},
                {"description": "Development", "quantity": 10.0, "unit_price": 120.0}
            ],
            "services": ["branding", "web"],
            // A client-supplied total is not representable and thus ignored.
        }),
    )
    .await;

    assert_eq!(quotation["total"], 2200.0);
    assert_eq!(quotation["status"], "DRAFT");
    assert!(quotation["author_id"].is_number());
}

/// An empty line-item list is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_line_items_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/quotations",
        &token,
        serde_json::json!({"line_items": []}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Updating the line items recomputes the total.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_recomputes_total(pool: PgPool) {
    let token = admin_token(&pool).await;
    let quotation =
        create_quotation(&pool, &token, serde_json::json!({"line_items": simple_items()})).await;
    let id = quotation["id"].as_i64().unwrap();
    assert_eq!(quotation["total"], 1600.0);

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        &format!("/api/v1/quotations/{id}"),
        &token,
        serde_json::json!({
            "line_items": [{"description": "Retainer", "quantity": 1.0, "unit_price": 999.0}],
            "status": "PENDING"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 999.0);
    assert_eq!(json["status"], "PENDING");
}

// ---------------------------------------------------------------------------
// Admin-only delete
// ---------------------------------------------------------------------------

/// Quotation deletion is destructive and admin-gated: 401 with no token,
/// 403 with a staff token, and the record survives both.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_requires_admin(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let (_staff_id, staff) = staff_token(&pool).await;

    let quotation =
        create_quotation(&pool, &admin, serde_json::json!({"line_items": simple_items()})).await;
    let id = quotation["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = common::delete(app, &format!("/api/v1/quotations/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/quotations/{id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still present.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/quotations/{id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The admin can delete it.
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/quotations/{id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
