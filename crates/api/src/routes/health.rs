//! Root-level probes, outside `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use folio_core::envelope::LIVENESS_TEXT;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the store does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match folio_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Store did not answer health probe");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
}
