//! Shared contracts for the portfolio service and its client.
//!
//! Record shapes, request DTOs, response envelopes and the presence checks
//! both sides agree on. Nothing in here performs I/O.

pub mod envelope;
pub mod error;
pub mod models;
pub mod tech;
pub mod types;
pub mod validation;
