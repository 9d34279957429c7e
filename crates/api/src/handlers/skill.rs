//! Handlers for the `/skills` resource. Skills have no update path.

use axum::extract::State;
use axum::Json;
use folio_core::envelope::{MessageEnvelope, SkillEnvelope, MSG_SKILL_DELETED};
use folio_core::models::skill::{CreateSkill, Skill};
use folio_core::types::DbId;
use folio_core::validation::validate_required;
use folio_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// POST /api/skills
///
/// `level` is stored as given; out-of-range percentages are accepted.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSkill>,
) -> AppResult<Json<SkillEnvelope>> {
    validate_required("Skill", &input)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;
    tracing::info!(id = skill.id, name = %skill.name, level = skill.level, "Skill created");
    Ok(Json(SkillEnvelope::ok(skill)))
}

/// GET /api/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    tracing::debug!(count = skills.len(), "Listed skills");
    Ok(Json(skills))
}

/// DELETE /api/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageEnvelope>> {
    let existed = SkillRepo::delete(&state.pool, id).await?;
    tracing::info!(id, existed, "Skill deleted");
    Ok(Json(MessageEnvelope::ok(MSG_SKILL_DELETED)))
}
