//! Generation session — holds one client's current proposal and drives the backend.
//!
//! States: Idle → Generating → Succeeded | Failed, with `reset()` back to Idle.
//!
//! Overlapping `start()` calls are not coordinated. Each spawns its own backend
//! call and writes its outcome when it settles, so the last one to settle wins.
//! Nothing is cancelled: a `reset()` while a call is in flight is overwritten
//! when that call settles.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::proposal::backend::ProposalBackend;
use crate::proposal::models::ProposalRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Generating,
    Succeeded(String),
    /// User-facing error message.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Generating,
    Succeeded,
    Failed,
}

impl GenerationState {
    pub fn status(&self) -> GenerationStatus {
        match self {
            GenerationState::Idle => GenerationStatus::Idle,
            GenerationState::Generating => GenerationStatus::Generating,
            GenerationState::Succeeded(_) => GenerationStatus::Succeeded,
            GenerationState::Failed(_) => GenerationStatus::Failed,
        }
    }
}

/// Point-in-time view of a session, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSnapshot {
    pub status: GenerationStatus,
    pub proposal: Option<String>,
    pub error: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Inner {
    state: GenerationState,
    updated_at: DateTime<Utc>,
}

impl Inner {
    fn transition(&mut self, state: GenerationState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}

#[derive(Clone)]
pub struct GenerationSession {
    session_id: Uuid,
    backend: Arc<dyn ProposalBackend>,
    inner: Arc<RwLock<Inner>>,
}

impl GenerationSession {
    pub fn new(session_id: Uuid, backend: Arc<dyn ProposalBackend>) -> Self {
        Self {
            session_id,
            backend,
            inner: Arc::new(RwLock::new(Inner {
                state: GenerationState::Idle,
                updated_at: Utc::now(),
            })),
        }
    }

    /// Moves to Generating and spawns the backend call.
    ///
    /// The returned handle resolves once the outcome has been written; callers
    /// are free to drop it.
    pub async fn start(&self, request: ProposalRequest) -> JoinHandle<()> {
        {
            let mut inner = self.inner.write().await;
            if inner.state == GenerationState::Generating {
                warn!(
                    "Session {} started a generation while another is in flight",
                    self.session_id
                );
            }
            inner.transition(GenerationState::Generating);
        }

        let session_id = self.session_id;
        let backend = Arc::clone(&self.backend);
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            let outcome = match backend.generate(&request).await {
                Ok(text) => {
                    info!("Session {session_id}: proposal generated ({} chars)", text.len());
                    GenerationState::Succeeded(text)
                }
                Err(err) => {
                    warn!("Session {session_id}: generation failed: {err}");
                    GenerationState::Failed(err.user_message())
                }
            };
            inner.write().await.transition(outcome);
        })
    }

    /// Overwrites the current proposal. Only valid once a generation has succeeded.
    pub async fn edit(&self, text: String) -> Result<(), AppError> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        match &mut inner.state {
            GenerationState::Succeeded(current) => {
                *current = text;
                inner.updated_at = Utc::now();
                Ok(())
            }
            other => Err(AppError::Conflict(format!(
                "No generated proposal to edit (session is {:?})",
                other.status()
            ))),
        }
    }

    /// Back to Idle, dropping any proposal or error.
    pub async fn reset(&self) {
        self.inner.write().await.transition(GenerationState::Idle);
        info!("Session {} reset", self.session_id);
    }

    #[cfg(test)]
    pub async fn state(&self) -> GenerationState {
        self.inner.read().await.state.clone()
    }

    pub async fn snapshot(&self) -> GenerationSnapshot {
        let inner = self.inner.read().await;
        let (proposal, error) = match &inner.state {
            GenerationState::Succeeded(text) => (Some(text.clone()), None),
            GenerationState::Failed(msg) => (None, Some(msg.clone())),
            GenerationState::Idle | GenerationState::Generating => (None, None),
        };
        GenerationSnapshot {
            status: inner.state.status(),
            proposal,
            error,
            updated_at: inner.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::proposal::backend::TemplateBackend;
    use crate::proposal::models::{Platform, Tone};
    use crate::proposal::synthesizer::synthesize;

    /// Settles after a delay that depends on tone, so tests can control settle order.
    struct ToneDelayBackend;

    #[async_trait]
    impl ProposalBackend for ToneDelayBackend {
        async fn generate(&self, request: &ProposalRequest) -> Result<String, AppError> {
            let delay = match request.tone {
                Tone::Professional => Duration::from_secs(5),
                _ => Duration::from_secs(1),
            };
            tokio::time::sleep(delay).await;
            Ok(format!("{} proposal", request.tone.as_str()))
        }

        fn name(&self) -> &'static str {
            "tone-delay"
        }
    }

    fn session_with_latency(latency: Duration) -> GenerationSession {
        GenerationSession::new(Uuid::new_v4(), Arc::new(TemplateBackend::new(latency)))
    }

    fn upwork_request(tone: Tone) -> ProposalRequest {
        ProposalRequest::new("https://www.upwork.com/jobs/~1", tone, Platform::Upwork)
    }

    #[tokio::test]
    async fn test_new_session_is_idle() {
        let session = session_with_latency(Duration::ZERO);
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, GenerationStatus::Idle);
        assert!(snapshot.proposal.is_none());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_goes_through_generating_to_succeeded() {
        let session = session_with_latency(Duration::from_secs(2));
        let request = upwork_request(Tone::Professional);

        let handle = session.start(request.clone()).await;
        assert_eq!(session.state().await, GenerationState::Generating);

        handle.await.unwrap();
        assert_eq!(
            session.state().await,
            GenerationState::Succeeded(synthesize(&request).unwrap())
        );
    }

    #[tokio::test]
    async fn test_unsupported_url_fails_with_message() {
        let session = session_with_latency(Duration::ZERO);
        let request =
            ProposalRequest::new("https://example.com/job", Tone::Professional, Platform::Upwork);

        session.start(request).await.await.unwrap();

        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, GenerationStatus::Failed);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Please enter a valid job URL from a supported platform")
        );
        assert!(snapshot.proposal.is_none());
    }

    #[tokio::test]
    async fn test_edit_overwrites_without_transition() {
        let session = session_with_latency(Duration::ZERO);
        session.start(upwork_request(Tone::Technical)).await.await.unwrap();

        session.edit("My own words".to_string()).await.unwrap();
        assert_eq!(
            session.state().await,
            GenerationState::Succeeded("My own words".to_string())
        );
    }

    #[tokio::test]
    async fn test_edit_rejected_unless_succeeded() {
        let session = session_with_latency(Duration::ZERO);
        assert!(matches!(
            session.edit("x".to_string()).await,
            Err(AppError::Conflict(_))
        ));

        let bad = ProposalRequest::new(
            "https://example.com",
            Tone::Professional,
            Platform::Other("other".to_string()),
        );
        session.start(bad).await.await.unwrap();
        assert!(matches!(
            session.edit("x".to_string()).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_rejected_while_generating() {
        let session = session_with_latency(Duration::from_secs(2));
        let handle = session.start(upwork_request(Tone::Professional)).await;
        assert!(session.edit("x".to_string()).await.is_err());
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_reset_discards_result_and_error() {
        let session = session_with_latency(Duration::ZERO);
        session.start(upwork_request(Tone::Professional)).await.await.unwrap();
        session.reset().await;
        assert_eq!(session.state().await, GenerationState::Idle);

        let bad = ProposalRequest::new("nope", Tone::Professional, Platform::Upwork);
        session.start(bad).await.await.unwrap();
        session.reset().await;
        let snapshot = session.snapshot().await;
        assert_eq!(snapshot.status, GenerationStatus::Idle);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_during_generation_is_overwritten_on_settle() {
        let session = session_with_latency(Duration::from_secs(2));
        let handle = session.start(upwork_request(Tone::Conversational)).await;
        session.reset().await;
        assert_eq!(session.state().await, GenerationState::Idle);

        handle.await.unwrap();
        assert_eq!(session.snapshot().await.status, GenerationStatus::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_starts_last_to_settle_wins() {
        let session = GenerationSession::new(Uuid::new_v4(), Arc::new(ToneDelayBackend));

        // Started first, settles last.
        let slow = session.start(upwork_request(Tone::Professional)).await;
        let fast = session.start(upwork_request(Tone::Technical)).await;

        fast.await.unwrap();
        assert_eq!(
            session.state().await,
            GenerationState::Succeeded("technical proposal".to_string())
        );

        slow.await.unwrap();
        assert_eq!(
            session.state().await,
            GenerationState::Succeeded("professional proposal".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_starts_with_equal_latency_keep_second() {
        let session = session_with_latency(Duration::from_secs(2));
        let first = session.start(upwork_request(Tone::Professional)).await;
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(100)).await;
        let second_request = upwork_request(Tone::Conversational);
        let second = session.start(second_request.clone()).await;

        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(
            session.state().await,
            GenerationState::Succeeded(synthesize(&second_request).unwrap())
        );
    }
}
