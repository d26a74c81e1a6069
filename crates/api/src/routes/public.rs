//! Route definitions for the `/api/public` surface (marketing site).
//!
//! No authentication; mounted behind a permissive CORS layer so the
//! marketing site can call it from any origin.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{blog_posts, galleries, leads, reviews, team_members};
use crate::state::AppState;

/// Routes mounted at `/api/public`.
///
/// ```text
/// GET  /team          -> team members
/// GET  /reviews       -> published reviews
/// GET  /galleries     -> published galleries
/// GET  /blog          -> published posts
/// GET  /blog/{slug}   -> published post by slug
/// POST /leads         -> contact-form submission (single or batch)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/team", get(team_members::public_list))
        .route("/reviews", get(reviews::public_list))
        .route("/galleries", get(galleries::public_list))
        .route("/blog", get(blog_posts::public_list))
        .route("/blog/{slug}", get(blog_posts::public_get_by_slug))
        .route("/leads", post(leads::submit))
}
