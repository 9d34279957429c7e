use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// `POST /contact -> create`. Contacts are write-only.
pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::create))
}
