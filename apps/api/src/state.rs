use std::sync::Arc;

use crate::config::Config;
use crate::proposal::backend::ProposalBackend;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable proposal backend. Default: TemplateBackend.
    pub backend: Arc<dyn ProposalBackend>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn ProposalBackend>) -> Self {
        let sessions = Arc::new(SessionStore::new(
            Arc::clone(&backend),
            config.session_ttl(),
        ));
        Self {
            config,
            backend,
            sessions,
        }
    }
}
