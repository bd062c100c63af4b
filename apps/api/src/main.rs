mod account;
mod config;
mod errors;
mod extract;
mod proposal;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::proposal::backend::TemplateBackend;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Proposal API v{}", env!("CARGO_PKG_VERSION"));

    let backend = Arc::new(TemplateBackend::new(config.proposal_latency()));
    info!(
        "Proposal backend initialized (template, latency {}ms)",
        config.proposal_latency_ms
    );

    let state = AppState::new(config.clone(), backend);
    state.sessions.spawn_sweeper(config.session_sweep_period());
    info!(
        "Session expiry: {}s idle TTL, swept every {}s",
        config.session_ttl_secs,
        config.session_sweep_period().as_secs()
    );

    if config.cors_allowed_origins.is_empty() {
        info!("CORS: any origin allowed");
    } else {
        info!("CORS: allowed origins {:?}", config.cors_allowed_origins);
    }
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
