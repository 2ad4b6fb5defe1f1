//! API Router
//! Mission: Assemble routes, role gates, and the boundary guard

use crate::{
    api::{awr, lpn, pick, ticket},
    auth::{
        self,
        api as auth_api,
        models::{Role, RoleSet},
        JwtHandler, RoleGate, UserStore,
    },
    config::AppConfig,
};
use axum::{
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserStore>,
    pub jwt: Arc<JwtHandler>,
}

impl AppState {
    pub fn new(config: AppConfig, users: UserStore) -> Self {
        let jwt = JwtHandler::new(config.jwt_secret.clone(), config.access_minutes);
        Self {
            config: Arc::new(config),
            users: Arc::new(users),
            jwt: Arc::new(jwt),
        }
    }
}

/// Create the API router with per-endpoint role requirements.
///
/// Layer order (outermost first): CORS, request logging, boundary guard, then
/// the per-route role gates, so a bad x-api-key is rejected before any gate or
/// handler runs.
pub fn create_router(state: AppState) -> Router {
    let operator_or_support = RoleGate::new(
        state.jwt.clone(),
        RoleSet::new(&[Role::Operator, Role::Support]),
    );
    let support_only = RoleGate::new(state.jwt.clone(), RoleSet::new(&[Role::Support]));

    let open_routes = Router::new()
        .route("/", get(health_check))
        .route("/auth/login", post(auth_api::login));

    let operator_routes = Router::new()
        .route("/auth/whoami", get(auth_api::whoami))
        .route("/lpn/:lpn_id", get(lpn::lpn_status))
        .route("/ticket/summarize", post(ticket::summarize))
        .route_layer(middleware::from_fn_with_state(
            operator_or_support,
            auth::role_gate,
        ));

    let support_routes = Router::new()
        .route("/pick/status/:delivery_id", get(pick::pick_status))
        .route("/monitor/awr/top-waits", get(awr::top_waits))
        .route("/monitor/awr/db-time", get(awr::db_time))
        .route_layer(middleware::from_fn_with_state(
            support_only,
            auth::role_gate,
        ));

    Router::new()
        .merge(open_routes)
        .merge(operator_routes)
        .merge(support_routes)
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth::api_key_guard,
        ))
        .layer(middleware::from_fn(crate::middleware::request_logging))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ===== Route Handlers =====

/// Health check endpoint (open path)
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        service: "AI-WMS",
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}
