//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use folio_core::envelope::{MessageEnvelope, ProjectEnvelope, MSG_PROJECT_DELETED};
use folio_core::error::CoreError;
use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::types::DbId;
use folio_core::validation::validate_required;
use folio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /api/projects
///
/// Fails with `400 VALIDATION_ERROR` when `title` or `description` is
/// missing; nothing is stored in that case.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<Json<ProjectEnvelope>> {
    validate_required("Project", &input)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, title = %project.title, "Project created");
    Ok(Json(ProjectEnvelope::ok(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// PUT /api/projects/{id}
///
/// Applies only the submitted fields. An unknown id is a `404 NOT_FOUND`.
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<ProjectEnvelope>> {
    validate_required("Project", &input)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(id, title = %project.title, "Project updated");
    Ok(Json(ProjectEnvelope::ok(project)))
}

/// DELETE /api/projects/{id}
///
/// Idempotent: succeeds whether or not the project still exists.
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageEnvelope>> {
    let existed = ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(id, existed, "Project deleted");
    Ok(Json(MessageEnvelope::ok(MSG_PROJECT_DELETED)))
}
