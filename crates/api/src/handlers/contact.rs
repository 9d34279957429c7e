use axum::extract::State;
use axum::Json;
use folio_core::envelope::{MessageEnvelope, MSG_CONTACT_SAVED};
use folio_core::models::contact::CreateContact;
use folio_core::validation::validate_required;
use folio_db::repositories::ContactRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/contact
///
/// Stores the message and acknowledges it; the stored record is not echoed.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContact>,
) -> AppResult<Json<MessageEnvelope>> {
    validate_required("Contact", &input)?;

    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(id = contact.id, "Contact message stored");
    Ok(Json(MessageEnvelope::ok(MSG_CONTACT_SAVED)))
}
