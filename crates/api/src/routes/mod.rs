pub mod auth;
pub mod blog_posts;
pub mod clients;
pub mod expenses;
pub mod galleries;
pub mod health;
pub mod invoices;
pub mod leads;
pub mod projects;
pub mod public;
pub mod quotations;
pub mod reviews;
pub mod team_members;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree (dashboard surface, token-gated).
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout
/// /auth/me                         profile get, patch
/// /auth/change-password            dedicated password change
///
/// /clients                         list, create
/// /clients/{id}                    get, update, delete
///
/// /projects                        list, create
/// /projects/{id}                   get, update (cascades to invoices), delete (cascades)
///
/// /invoices                        list (?project_id=), create
/// /invoices/{id}                   get, update, delete
/// /invoices/{id}/payments          record payment (POST)
///
/// /users                           list, create (admin only)
/// /users/{id}                      get, update, delete-with-cascades (admin only)
///
/// /leads                           list (role-filtered)
/// /leads/{id}                      get, patch, delete
/// /leads/{id}/assignment           assign / unassign (PUT)
///
/// /quotations                      list (?status=), create (sequential quote_id)
/// /quotations/{id}                 get, update, delete (admin only)
///
/// /expenses                        list, create
/// /expenses/{id}                   get, update, delete
///
/// /team                            list, create
/// /team/{id}                       get, update, delete
///
/// /reviews                         list, create
/// /reviews/{id}                    get, update, delete
///
/// /galleries                       list, create
/// /galleries/{id}                  get, update, delete (admin only)
///
/// /blog                            list, create
/// /blog/{id}                       get, update, delete (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/clients", clients::router())
        .nest("/projects", projects::router())
        .nest("/invoices", invoices::router())
        .nest("/users", users::router())
        .nest("/leads", leads::router())
        .nest("/quotations", quotations::router())
        .nest("/expenses", expenses::router())
        .nest("/team", team_members::router())
        .nest("/reviews", reviews::router())
        .nest("/galleries", galleries::router())
        .nest("/blog", blog_posts::router())
}

/// Build the `/api/public` route tree (marketing-site surface, no auth,
/// permissive CORS).
///
/// ```text
/// /team             team members
/// /reviews          published reviews
/// /galleries        published galleries
/// /blog             published posts
/// /blog/{slug}      published post by slug
/// /leads            contact-form submission (single or batch, deduplicated)
/// ```
pub fn public_routes() -> Router<AppState> {
    public::router()
}
