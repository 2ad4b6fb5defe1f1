//! Authentication API Endpoints
//! Mission: Provide login and the identity echo

use crate::api::routes::AppState;
use crate::auth::middleware::AuthError;
use crate::auth::models::{Claims, LoginRequest, TokenResponse, WhoamiResponse};
use axum::{extract::State, response::Json, Extension, Form};
use tracing::{info, warn};

/// Login endpoint - POST /auth/login
///
/// Accepts the OAuth2 password form and returns a bearer token carrying a
/// snapshot of the account's roles.
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Some(user) = state.users.authenticate(&payload.username, &payload.password) else {
        warn!("❌ Failed login attempt: {}", payload.username);
        return Err(AuthError::InvalidCredentials);
    };

    let token = state
        .jwt
        .issue(&user.username, user.roles.clone())
        .map_err(|_| AuthError::Internal)?;

    info!("✅ Login successful: {}", user.username);

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// Identity echo - GET /auth/whoami
///
/// Claims come from request extensions, placed there by the role gate.
pub async fn whoami(Extension(claims): Extension<Claims>) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        user: claims.sub,
        roles: claims.roles,
    })
}
