//! Contact message record and DTO. Contacts are write-only: there is no
//! list, update or delete path.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// A message from the `contacts` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

/// DTO for submitting a contact message. All fields are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateContact {
    #[validate(required, length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
