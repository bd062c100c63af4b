pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::account::handlers as account;
use crate::config::Config;
use crate::proposal::handlers as proposal;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Proposal API
        .route("/api/v1/proposals", post(proposal::handle_generate_proposal))
        .route(
            "/api/v1/proposals/options",
            get(proposal::handle_proposal_options),
        )
        // Plans
        .route("/api/v1/plans", get(account::handle_list_plans))
        // Session API
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/generate",
            post(session::handle_start_generation),
        )
        .route(
            "/api/v1/sessions/:id/proposal",
            put(session::handle_edit_proposal),
        )
        .route(
            "/api/v1/sessions/:id/reset",
            post(session::handle_reset_session),
        )
        .route(
            "/api/v1/sessions/:id/checkout",
            post(account::handle_checkout),
        )
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise limited to the listed ones.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
