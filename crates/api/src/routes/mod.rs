pub mod contact;
pub mod health;
pub mod project;
pub mod skill;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list, create
/// /projects/{id}            update, delete
///
/// /skills                   list, create
/// /skills/{id}              delete
///
/// /contact                  create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/skills", skill::router())
        .merge(contact::router())
}
