//! Portfolio client application.
//!
//! Keeps a local view of the portfolio (built-in default records plus
//! records fetched from the API), applies user actions through
//! [`app::Portfolio`], and renders the active section as text.

pub mod api;
pub mod app;
pub mod command;
pub mod config;
pub mod defaults;
pub mod entry;
pub mod error;
pub mod notify;
pub mod render;
pub mod state;
