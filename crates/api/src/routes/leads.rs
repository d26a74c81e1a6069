//! Route definitions for the `/leads` resource (dashboard surface).
//!
//! Lead submission lives on the public router, not here.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::leads;
use crate::state::AppState;

/// Routes mounted at `/leads`.
///
/// ```text
/// GET    /                  -> list (admins see all, staff see their own)
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/assignment   -> assign / unassign
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leads::list))
        .route(
            "/{id}",
            get(leads::get_by_id)
                .patch(leads::update)
                .delete(leads::delete),
        )
        .route("/{id}/assignment", put(leads::assign))
}
