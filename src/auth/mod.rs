//! Authentication Module
//! Mission: Secure API access with JWT tokens and role-based authorization

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod user_store;

pub use jwt::JwtHandler;
pub use middleware::{api_key_guard, role_gate, AuthError, RoleGate, OPEN_PATHS};
pub use user_store::UserStore;
