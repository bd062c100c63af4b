use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::info;
use uuid::Uuid;

use crate::account::context::AccountContext;
use crate::errors::AppError;
use crate::proposal::backend::ProposalBackend;
use crate::session::generation::{GenerationSession, GenerationSnapshot};

/// One client's application session: its generation state and its account context.
pub struct UserSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub generation: GenerationSession,
    pub account: RwLock<AccountContext>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub generation: GenerationSnapshot,
    pub account: AccountContext,
    pub premium: bool,
}

impl UserSession {
    pub async fn view(&self) -> SessionView {
        let account = self.account.read().await.clone();
        SessionView {
            session_id: self.id,
            created_at: self.created_at,
            generation: self.generation.snapshot().await,
            premium: account.is_premium(),
            account,
        }
    }
}

struct SessionEntry {
    session: Arc<UserSession>,
    last_seen: Instant,
}

/// In-memory session registry. Sessions vanish on restart, and any session left
/// untouched for longer than the idle TTL is dropped.
pub struct SessionStore {
    backend: Arc<dyn ProposalBackend>,
    idle_ttl: Duration,
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn ProposalBackend>, idle_ttl: Duration) -> Self {
        Self {
            backend,
            idle_ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> Arc<UserSession> {
        let id = Uuid::new_v4();
        let session = Arc::new(UserSession {
            id,
            created_at: Utc::now(),
            generation: GenerationSession::new(id, Arc::clone(&self.backend)),
            account: RwLock::new(AccountContext::default()),
        });

        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            SessionEntry {
                session: Arc::clone(&session),
                last_seen: Instant::now(),
            },
        );
        info!("Created session {id} ({} active)", sessions.len());
        session
    }

    /// Looks a session up and refreshes its idle timer. Expired sessions are
    /// removed here even if the sweeper has not reached them yet.
    pub async fn get(&self, id: Uuid) -> Result<Arc<UserSession>, AppError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&id) {
            Some(entry) if now.duration_since(entry.last_seen) < self.idle_ttl => {
                entry.last_seen = now;
                Ok(Arc::clone(&entry.session))
            }
            Some(_) => {
                sessions.remove(&id);
                info!("Session {id} expired after {:?} idle", self.idle_ttl);
                Err(not_found(id))
            }
            None => Err(not_found(id)),
        }
    }

    /// Drops the session. In-flight generations finish against the orphaned state.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.sessions.write().await.remove(&id);
        match removed {
            Some(_) => {
                info!("Ended session {id}");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Removes every session idle for at least the TTL. Returns how many were dropped.
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_ttl);
        before - sessions.len()
    }

    /// Runs `sweep_expired` every `period` until the store is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let store = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let Some(store) = store.upgrade() else {
                    break;
                };
                let expired = store.sweep_expired().await;
                if expired > 0 {
                    info!(
                        "Expired {expired} idle session(s) ({} active)",
                        store.len().await
                    );
                }
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
