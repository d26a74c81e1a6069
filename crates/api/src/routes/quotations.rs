//! Route definitions for the `/quotations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::quotations;
use crate::state::AppState;

/// Routes mounted at `/quotations`.
///
/// ```text
/// GET    /        -> list (?status=)
/// POST   /        -> create (server-generated sequential quote_id)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(quotations::list).post(quotations::create))
        .route(
            "/{id}",
            get(quotations::get_by_id)
                .put(quotations::update)
                .delete(quotations::delete),
        )
}
