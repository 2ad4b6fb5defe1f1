//! WMS Support Backend Library
//!
//! Exposes core modules for use by the binary and integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod middleware;

pub use api::{create_router, AppState};
pub use config::AppConfig;
