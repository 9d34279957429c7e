//! Record shapes and DTOs for the three portfolio collections.
//!
//! Each submodule contains:
//! - A `Serialize + Deserialize` record struct as stored and returned by the API
//!   (plus `FromRow` when the `sqlx` feature is on)
//! - A `Validate` create DTO whose required fields are `Option` so absence is
//!   reported as a validation error rather than a decode error
//! - An update DTO where the resource supports updates

pub mod contact;
pub mod project;
pub mod skill;
