//! Route definitions for the `/galleries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::galleries;
use crate::state::AppState;

/// Routes mounted at `/galleries`. Deletion is admin-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(galleries::list).post(galleries::create))
        .route(
            "/{id}",
            get(galleries::get_by_id)
                .put(galleries::update)
                .delete(galleries::delete),
        )
}
