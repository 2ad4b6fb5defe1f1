//! Process Configuration
//! Mission: Load immutable runtime settings from the environment

use anyhow::{bail, Result};
use std::env;

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HS256 signing secret. Required: there is no safe default value.
    pub jwt_secret: String,
    /// Token lifetime in minutes.
    pub access_minutes: i64,
    /// Optional shared secret required in `x-api-key` on non-open paths.
    pub api_key: Option<String>,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(s) if !s.trim().is_empty() => s,
            _ => bail!("JWT_SECRET must be set to a non-empty value"),
        };

        let access_minutes = env::var("JWT_ACCESS_MIN")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(60);

        let api_key = env::var("API_KEY_HEADER").ok().filter(|v| !v.is_empty());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        Ok(Self {
            jwt_secret,
            access_minutes,
            api_key,
            bind_addr,
        })
    }
}
