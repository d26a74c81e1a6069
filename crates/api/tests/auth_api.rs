//! HTTP-level integration tests for authentication, profile, and
//! password-change endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_token, patch_json_auth, post_json,
    post_json_auth,
};
use pxl_db::models::user::Role;
use pxl_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns tokens and public user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "login@test.com", Role::Admin).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "login@test.com", "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["role"], "admin");
}

/// Wrong password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_test_user(&pool, "wrongpw@test.com", Role::Staff).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Nonexistent email returns 401 (not 404, to avoid user enumeration).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@test.com", "password": "whatever" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five consecutive failures lock the account; the right password is then
/// rejected with 403 until the lock expires.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_lockout_after_failed_attempts(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "lockout@test.com", Role::Staff).await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({ "email": "lockout@test.com", "password": "bad-guess" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "lockout@test.com", "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

/// A refresh token is single-use: it yields new tokens once, then fails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_token_rotation(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "rotate@test.com", Role::Staff).await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            serde_json::json!({ "email": "rotate@test.com", "password": password }),
        )
        .await,
    )
    .await;
    let refresh_token = login["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Replaying the consumed token fails.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /auth/me returns the caller's info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_caller(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "me@test.com", Role::Staff).await;
    let token = login_token(&pool, "me@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["email"], "me@test.com");
}

/// A role smuggled into the profile-update body is ignored: the generic
/// path only carries name and email.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_update_cannot_change_role(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "sneaky@test.com", Role::Staff).await;
    let token = login_token(&pool, "sneaky@test.com", &password).await;

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/auth/me",
        &token,
        serde_json::json!({ "name": "Renamed", "role": "admin", "password": "own3d" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    assert_eq!(json["role"], "staff", "role must be unchanged");

    let row = UserRepo::find_by_id(&pool, user.id)
        .await
        .unwrap()
        .expect("user still exists");
    assert_eq!(row.role, Role::Staff);
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

/// The dedicated password-change action verifies the current password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_requires_current(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "pwchange@test.com", Role::Staff).await;
    let token = login_token(&pool, "pwchange@test.com", &password).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "current_password": "not-my-password", "new_password": "brand-new-pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The old password still works.
    login_token(&pool, "pwchange@test.com", &password).await;
}

/// A successful change invalidates the old password and accepts the new one.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_success(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "newpw@test.com", Role::Staff).await;
    let token = login_token(&pool, "newpw@test.com", &password).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "current_password": password, "new_password": "completely-new-pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "newpw@test.com", "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    login_token(&pool, "newpw@test.com", "completely-new-pw").await;
}

/// A too-short new password is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_change_password_rejects_short_password(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "shortpw@test.com", Role::Staff).await;
    let token = login_token(&pool, "shortpw@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/auth/change-password",
        &token,
        serde_json::json!({ "current_password": password, "new_password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
