//! Authentication Middleware
//! Mission: Reject unauthenticated, under-privileged, and out-of-boundary requests

use crate::auth::jwt::JwtHandler;
use crate::auth::models::{Claims, RoleSet};
use crate::config::AppConfig;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Paths served without any authentication: health check and login.
pub const OPEN_PATHS: &[&str] = &["/", "/auth/login"];

/// Auth rejection taxonomy. Every variant is terminal for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login rejected; unknown user and bad password are indistinguishable
    InvalidCredentials,
    /// Token malformed, tampered, or expired
    InvalidToken,
    /// Protected call without a usable token
    Unauthenticated,
    /// Valid token, insufficient role
    Forbidden,
    /// Shared-secret header mismatch at the process boundary
    BoundaryRejected,
    /// Unexpected infrastructure failure
    Internal,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Bad credentials"),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            AuthError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid authorization token",
            ),
            AuthError::Forbidden => (StatusCode::FORBIDDEN, "Insufficient role"),
            AuthError::BoundaryRejected => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Per-route authorization gate: token verification plus role intersection.
#[derive(Clone)]
pub struct RoleGate {
    jwt: Arc<JwtHandler>,
    required: RoleSet,
}

impl RoleGate {
    pub fn new(jwt: Arc<JwtHandler>, required: RoleSet) -> Self {
        Self { jwt, required }
    }

    /// Pure authorization decision over a bearer token.
    ///
    /// Verification failure of any kind surfaces as `Unauthenticated`; a valid
    /// token whose roles do not overlap the required set is `Forbidden`.
    pub fn check(&self, bearer: Option<&str>) -> Result<Claims, AuthError> {
        let token = bearer.ok_or(AuthError::Unauthenticated)?;
        let claims = self
            .jwt
            .verify(token)
            .map_err(|_| AuthError::Unauthenticated)?;

        if !claims.roles.intersects(&self.required) {
            return Err(AuthError::Forbidden);
        }

        Ok(claims)
    }
}

/// Middleware enforcing a `RoleGate` on every route it is layered over.
///
/// On success the verified claims are inserted into request extensions so
/// handlers can report the acting principal.
pub async fn role_gate(
    State(gate): State<RoleGate>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let bearer = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    let claims = gate.check(bearer)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Coarse single-tenant boundary guard.
///
/// Open paths bypass everything. For any other path, when a shared secret is
/// configured the request's `x-api-key` header must match it exactly before a
/// handler or role gate ever runs. Unset secret disables the check.
pub async fn api_key_guard(
    State(config): State<Arc<AppConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if OPEN_PATHS.contains(&req.uri().path()) {
        return Ok(next.run(req).await);
    }

    if let Some(expected) = config.api_key.as_deref() {
        let supplied = req.headers().get("x-api-key").and_then(|h| h.to_str().ok());
        if supplied != Some(expected) {
            warn!(path = %req.uri().path(), "Rejected request with bad x-api-key");
            return Err(AuthError::BoundaryRejected);
        }
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::Role;

    fn gate(required: &[Role]) -> RoleGate {
        let jwt = Arc::new(JwtHandler::new("test-secret-key-12345".to_string(), 60));
        RoleGate::new(jwt, RoleSet::new(required))
    }

    fn token_with(roles: &[Role]) -> String {
        JwtHandler::new("test-secret-key-12345".to_string(), 60)
            .issue("operator1", RoleSet::new(roles))
            .unwrap()
    }

    #[test]
    fn test_auth_error_responses() {
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::BoundaryRejected.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_gate_accepts_overlapping_roles() {
        let token = token_with(&[Role::Operator]);
        let claims = gate(&[Role::Operator, Role::Support])
            .check(Some(&token))
            .unwrap();
        assert_eq!(claims.sub, "operator1");
    }

    #[test]
    fn test_gate_forbids_disjoint_roles() {
        let token = token_with(&[Role::Operator]);
        assert_eq!(
            gate(&[Role::Support]).check(Some(&token)).unwrap_err(),
            AuthError::Forbidden
        );
    }

    #[test]
    fn test_gate_rejects_missing_token() {
        assert_eq!(
            gate(&[Role::Operator]).check(None).unwrap_err(),
            AuthError::Unauthenticated
        );
    }

    #[test]
    fn test_gate_rejects_garbage_token() {
        assert_eq!(
            gate(&[Role::Operator])
                .check(Some("not.a.token"))
                .unwrap_err(),
            AuthError::Unauthenticated
        );
    }

    #[test]
    fn test_gate_rejects_token_signed_elsewhere() {
        let foreign = JwtHandler::new("other-secret".to_string(), 60)
            .issue("operator1", RoleSet::new(&[Role::Operator]))
            .unwrap();
        assert_eq!(
            gate(&[Role::Operator]).check(Some(&foreign)).unwrap_err(),
            AuthError::Unauthenticated
        );
    }
}
