//! Presence checks for write DTOs.
//!
//! The DTOs declare their rules with `validator` derives; this module turns
//! a failed check into a [`CoreError::Validation`] with a stable message that
//! names every missing field.

use validator::Validate;

use crate::error::CoreError;

/// Run the DTO's rules and report every offending field.
///
/// Message format: `"{entity} validation failed: a is required, b is required"`,
/// fields in alphabetical order.
pub fn validate_required<T: Validate>(entity: &str, input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<&str> = errors.errors().keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();

        let detail = fields
            .iter()
            .map(|field| format!("{field} is required"))
            .collect::<Vec<_>>()
            .join(", ");

        CoreError::Validation(format!("{entity} validation failed: {detail}"))
    })
}
