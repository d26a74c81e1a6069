//! HTTP-level integration tests for the content entities (team members,
//! reviews, galleries, blog posts) and the public marketing surface.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, get_auth, post_json_auth, staff_token};
use pxl_core::payload::MAX_EMBEDDED_IMAGE_BYTES;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

/// The public surface serves only published reviews/galleries/posts and
/// requires no token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_surface_filters_unpublished(pool: PgPool) {
    let token = admin_token(&pool).await;

    for (body, uri) in [
        (
            serde_json::json!({"author": "Ada", "rating": 5, "body": "Great work", "published": true}),
            "/api/v1/reviews",
        ),
        (
            serde_json::json!({"author": "Bob", "rating": 3, "body": "Fine", "published": false}),
            "/api/v1/reviews",
        ),
        (
            serde_json::json!({"title": "Live post", "slug": "live-post", "body": "...", "published": true}),
            "/api/v1/blog",
        ),
        (
            serde_json::json!({"title": "Draft post", "slug": "draft-post", "body": "...", "published": false}),
            "/api/v1/blog",
        ),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, uri, &token, body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let reviews = body_json(get(app, "/api/public/reviews").await).await;
    let reviews = reviews.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["author"], "Ada");

    let app = common::build_test_app(pool.clone());
    let posts = body_json(get(app, "/api/public/blog").await).await;
    assert_eq!(posts.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/public/blog/live-post").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Unpublished slugs 404 on the public surface.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/public/blog/draft-post").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Payload guards
// ---------------------------------------------------------------------------

/// An oversized embedded photo is rejected with 400 before any write.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_oversized_team_photo_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let huge_photo = format!(
        "data:image/png;base64,{}",
        "A".repeat(MAX_EMBEDDED_IMAGE_BYTES)
    );

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/team",
        &token,
        serde_json::json!({"name": "Big Photo", "title": "Designer", "photo": huge_photo}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let members = body_json(get_auth(app, "/api/v1/team", &token).await).await;
    assert!(members.as_array().unwrap().is_empty(), "nothing was written");
}

/// A gallery with one oversized image among several is rejected whole.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_oversized_gallery_image_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let huge = format!("data:image/jpeg;base64,{}", "B".repeat(MAX_EMBEDDED_IMAGE_BYTES));

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/galleries",
        &token,
        serde_json::json!({
            "title": "Mixed sizes",
            "images": ["data:image/jpeg;base64,ok", huge]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A review rating outside 1..=5 is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_review_rating_bounds(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/reviews",
        &token,
        serde_json::json!({"author": "Overrater", "rating": 6, "body": "!!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Admin-gated destructive operations
// ---------------------------------------------------------------------------

/// Blog post deletion without an admin token fails (401 or 403) and leaves
/// the record in place; gallery deletion behaves the same.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_destructive_content_ops_require_admin(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let (_staff_id, staff) = staff_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let post = body_json(
        post_json_auth(
            app,
            "/api/v1/blog",
            &admin,
            serde_json::json!({"title": "Keep me", "slug": "keep-me", "body": "..."}),
        )
        .await,
    )
    .await;
    let post_id = post["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let gallery = body_json(
        post_json_auth(
            app,
            "/api/v1/galleries",
            &admin,
            serde_json::json!({"title": "Portfolio"}),
        )
        .await,
    )
    .await;
    let gallery_id = gallery["id"].as_i64().unwrap();

    // No token: 401.
    let app = common::build_test_app(pool.clone());
    let response = common::delete(app, &format!("/api/v1/blog/{post_id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Staff token: 403.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/blog/{post_id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/galleries/{gallery_id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Both records still present.
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/blog/{post_id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::OK);
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/galleries/{gallery_id}"), &staff).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Admin can delete.
    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/blog/{post_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/galleries/{gallery_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Invoice payments accumulate and drive the derived status.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_invoice_payment_status_progression(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let invoice = body_json(
        post_json_auth(
            app,
            "/api/v1/invoices",
            &token,
            serde_json::json!({"title": "Retainer", "amount": 1000.0}),
        )
        .await,
    )
    .await;
    let id = invoice["id"].as_i64().unwrap();
    assert_eq!(invoice["status"], "DRAFT");

    let app = common::build_test_app(pool.clone());
    let partial = body_json(
        post_json_auth(
            app,
            &format!("/api/v1/invoices/{id}/payments"),
            &token,
            serde_json::json!({"amount": 400.0, "note": "deposit"}),
        )
        .await,
    )
    .await;
    assert_eq!(partial["status"], "PARTIAL");
    assert_eq!(partial["paid_amount"], 400.0);

    let app = common::build_test_app(pool);
    let paid = body_json(
        post_json_auth(
            app,
            &format!("/api/v1/invoices/{id}/payments"),
            &token,
            serde_json::json!({"amount": 600.0}),
        )
        .await,
    )
    .await;
    assert_eq!(paid["status"], "PAID");
    assert_eq!(paid["paid_amount"], 1000.0);
    assert_eq!(paid["payments"].as_array().unwrap().len(), 2);
}
