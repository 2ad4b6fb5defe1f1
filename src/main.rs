//! AI WMS Support API
//! Mission: Role-gated mock endpoints for warehouse support workflows

use anyhow::{Context, Result};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wms_support_backend::{api, auth::UserStore, config::AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let users = UserStore::with_demo_users()?;

    let bind_addr = config.bind_addr.clone();
    let state = api::AppState::new(config, users);
    let app = api::create_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("🚀 WMS support API listening on {}", bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
