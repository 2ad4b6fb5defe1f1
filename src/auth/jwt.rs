//! JWT Token Handler
//! Mission: Issue and verify signed bearer tokens

use crate::auth::middleware::AuthError;
use crate::auth::models::{Claims, RoleSet};
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// JWT handler for token operations (HS256, process-wide secret)
pub struct JwtHandler {
    secret: String,
    access_minutes: i64,
}

impl JwtHandler {
    pub fn new(secret: String, access_minutes: i64) -> Self {
        Self {
            secret,
            access_minutes,
        }
    }

    /// Issue a token for a verified principal.
    ///
    /// The role set is a snapshot taken at issuance; later registry changes
    /// never invalidate an outstanding token, only expiry does.
    pub fn issue(&self, sub: &str, roles: RoleSet) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(chrono::Duration::minutes(self.access_minutes))
            .context("Invalid expiry timestamp")?;

        let claims = Claims {
            sub: sub.to_string(),
            roles,
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        debug!(
            "Issuing JWT for {}, expires in {}m",
            sub, self.access_minutes
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign JWT")
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Trusts the signature alone: there is no lookup against the credential
    /// registry. Zero leeway, so a token is invalid the second it expires.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AuthError::InvalidToken)?;

        debug!("Validated JWT for {}", decoded.claims.sub);

        Ok(decoded.claims)
    }
}
