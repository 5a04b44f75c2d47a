// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::session::DashboardSession;
use crate::infrastructure::api_client::ApiClient;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::file_preferences::FilePreferences;
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG wins over the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Backend client and preference store (infrastructure layer)
    let api = Arc::new(ApiClient::new(&config.backend.base_url, &config.backend.api_prefix));
    let preferences = Arc::new(FilePreferences::new(&config.preferences.path));

    // Session (application layer), initial fetch runs in the background
    let session = Arc::new(DashboardSession::new(api, preferences));
    session.start();

    let state = Arc::new(AppState { session });

    // Build router (presentation layer)
    let router = presentation::router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("invalid server.bind address {}", config.server.bind))?;
    tracing::info!(backend = %config.backend.base_url, "Starting JUMIA dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
