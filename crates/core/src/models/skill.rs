//! Skill record and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;

/// A skill document from the `skills` collection.
///
/// `level` is a percentage by convention only; no bound is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub level: f64,
}

/// DTO for creating a skill. Both fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(required, length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(required)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
}
