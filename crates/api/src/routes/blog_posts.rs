//! Route definitions for the `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog_posts;
use crate::state::AppState;

/// Routes mounted at `/blog`. Deletion is admin-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog_posts::list).post(blog_posts::create))
        .route(
            "/{id}",
            get(blog_posts::get_by_id)
                .put(blog_posts::update)
                .delete(blog_posts::delete),
        )
}
