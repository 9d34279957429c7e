//! Route definitions for the `/skills` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skill::list).post(skill::create))
        .route("/{id}", delete(skill::delete))
}
