//! Route definitions for the `/team` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::team_members;
use crate::state::AppState;

/// Routes mounted at `/team`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team_members::list).post(team_members::create))
        .route(
            "/{id}",
            get(team_members::get_by_id)
                .put(team_members::update)
                .delete(team_members::delete),
        )
}
