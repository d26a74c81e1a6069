//! HTTP-level integration tests for projects and their invoice cascades.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

async fn create_project(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/projects", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn create_invoice(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/invoices", token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

async fn list_invoices_for(pool: &PgPool, token: &str, project_id: i64) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(
        app,
        &format!("/api/v1/invoices?project_id={project_id}"),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// CRUD basics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let token = admin_token(&pool).await;
    let project = create_project(
        &pool,
        &token,
        serde_json::json!({"title": "Brand refresh", "amount": 4500.0}),
    )
    .await;

    assert_eq!(project["title"], "Brand refresh");
    assert_eq!(project["status"], "PLANNING");
    assert!(project["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/projects/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Update cascade: field propagation
// ---------------------------------------------------------------------------

/// Changing a project's title/amount rewrites both fields on every invoice
/// referencing it, and only on those.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_update_propagates_to_invoices(pool: PgPool) {
    let token = admin_token(&pool).await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({"title": "Original title", "amount": 1000.0}),
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    create_invoice(
        &pool,
        &token,
        serde_json::json!({"project_id": project_id, "title": "Original title", "amount": 1000.0}),
    )
    .await;
    // An unrelated invoice that must not be touched.
    let unrelated = create_invoice(
        &pool,
        &token,
        serde_json::json!({"title": "Unrelated", "amount": 50.0}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}"),
        &token,
        serde_json::json!({"title": "Renamed", "amount": 2000.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Renamed");
    let steps = json["cascade"].as_array().unwrap();
    assert_eq!(steps[0]["name"], "propagate-invoice-fields");
    assert_eq!(steps[0]["outcome"], "applied");
    assert_eq!(steps[0]["rows"], 1);

    let invoices = list_invoices_for(&pool, &token, project_id).await;
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["title"], "Renamed");
    assert_eq!(invoices[0]["amount"], 2000.0);

    let app = common::build_test_app(pool);
    let response = get_auth(
        app,
        &format!("/api/v1/invoices/{}", unrelated["id"].as_i64().unwrap()),
        &token,
    )
    .await;
    let untouched = body_json(response).await;
    assert_eq!(untouched["title"], "Unrelated");
}

// ---------------------------------------------------------------------------
// Update cascade: auto-invoice on completion
// ---------------------------------------------------------------------------

/// Completing a project with no invoice creates exactly one, copying the
/// project's title/amount/client. Repeating the update does not create a
/// second one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_completed_project_auto_creates_invoice_once(pool: PgPool) {
    let token = admin_token(&pool).await;

    let project = create_project(
        &pool,
        &token,
        serde_json::json!({"title": "Site build", "amount": 7500.0, "client_id": 42}),
    )
    .await;
    let project_id = project["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}"),
        &token,
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let steps = json["cascade"].as_array().unwrap();
    assert_eq!(steps[1]["name"], "auto-create-invoice");
    assert_eq!(steps[1]["outcome"], "applied");

    let invoices = list_invoices_for(&pool, &token, project_id).await;
    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0]["title"], "Site build");
    assert_eq!(invoices[0]["amount"], 7500.0);
    assert_eq!(invoices[0]["client_id"], 42);
    assert_eq!(invoices[0]["status"], "DRAFT");

    // Idempotent on repeat.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        &format!("/api/v1/projects/{project_id}"),
        &token,
        serde_json::json!({"status": "COMPLETED"}),
    )
    .await;
    let json = body_json(response).await;
    let steps = json["cascade"].as_array().unwrap();
    assert_eq!(steps[1]["outcome"], "skipped");

    let invoices = list_invoices_for(&pool, &token, project_id).await;
    assert_eq!(invoices.len(), 1, "no second invoice may be created");
}

// ---------------------------------------------------------------------------
// Delete cascade
// ---------------------------------------------------------------------------

/// Deleting a project removes every invoice referencing it, and no others.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_delete_removes_its_invoices(pool: PgPool) {
    let token = admin_token(&pool).await;

    let doomed = create_project(
        &pool,
        &token,
        serde_json::json!({"title": "Doomed", "amount": 100.0}),
    )
    .await;
    let doomed_id = doomed["id"].as_i64().unwrap();
    let survivor = create_project(
        &pool,
        &token,
        serde_json::json!({"title": "Survivor", "amount": 100.0}),
    )
    .await;
    let survivor_id = survivor["id"].as_i64().unwrap();

    for _ in 0..2 {
        create_invoice(
            &pool,
            &token,
            serde_json::json!({"project_id": doomed_id, "title": "Doomed inv", "amount": 10.0}),
        )
        .await;
    }
    create_invoice(
        &pool,
        &token,
        serde_json::json!({"project_id": survivor_id, "title": "Survivor inv", "amount": 10.0}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/projects/{doomed_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["deleted"], true);
    let steps = json["cascade"].as_array().unwrap();
    assert_eq!(steps[0]["name"], "delete-invoices");
    assert_eq!(steps[0]["rows"], 2);

    assert!(list_invoices_for(&pool, &token, doomed_id).await.is_empty());
    assert_eq!(list_invoices_for(&pool, &token, survivor_id).await.len(), 1);
}
