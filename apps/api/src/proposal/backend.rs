//! Proposal backends — pluggable, trait-based producers of proposal text.
//!
//! Default: `TemplateBackend` (template synthesis behind a simulated network delay).
//! A network-backed implementation only needs to implement `ProposalBackend`.
//!
//! `AppState` holds an `Arc<dyn ProposalBackend>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::proposal::models::ProposalRequest;
use crate::proposal::synthesizer::synthesize;

/// Produces proposal text for a request. Swap implementations without touching
/// handlers or sessions.
#[async_trait]
pub trait ProposalBackend: Send + Sync {
    async fn generate(&self, request: &ProposalRequest) -> Result<String, AppError>;

    /// Short identifier for logs and health output.
    fn name(&self) -> &'static str;
}

/// Template synthesis with an artificial latency standing in for a model call.
#[derive(Debug, Clone)]
pub struct TemplateBackend {
    latency: Duration,
}

impl TemplateBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ProposalBackend for TemplateBackend {
    async fn generate(&self, request: &ProposalRequest) -> Result<String, AppError> {
        info!(
            "Generating proposal: url={} tone={} platform={} target_length={}",
            request.job_url,
            request.tone.as_str(),
            request.platform.as_str(),
            request.target_length()
        );
        debug!(
            "Custom instructions present: {}",
            request.custom_instructions().is_some()
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let text = synthesize(request)?;
        debug!("Synthesized proposal ({} chars)", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::models::{Platform, Tone};

    #[tokio::test]
    async fn test_template_backend_matches_synthesizer() {
        let backend = TemplateBackend::new(Duration::ZERO);
        let request =
            ProposalRequest::new("https://www.upwork.com/jobs/~1", Tone::Technical, Platform::Upwork);
        let text = backend.generate(&request).await.unwrap();
        assert_eq!(text, synthesize(&request).unwrap());
    }

    #[tokio::test]
    async fn test_template_backend_maps_validation_error() {
        let backend = TemplateBackend::new(Duration::ZERO);
        let request =
            ProposalRequest::new("https://example.com/job", Tone::Professional, Platform::Upwork);
        match backend.generate(&request).await {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Please enter a valid job URL from a supported platform")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_template_backend_waits_for_latency() {
        let backend = TemplateBackend::new(Duration::from_secs(2));
        let request =
            ProposalRequest::new("https://www.fiverr.com/r/1", Tone::Professional, Platform::Fiverr);

        let started = tokio::time::Instant::now();
        backend.generate(&request).await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(TemplateBackend::new(Duration::ZERO).name(), "template");
    }
}
