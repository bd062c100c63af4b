//! Axum route handlers for the Proposal API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::proposal::models::{
    LengthLabel, Platform, ProposalRequest, ProposalResponse, Tone, DEFAULT_TARGET_LENGTH,
    MAX_TARGET_LENGTH, MIN_TARGET_LENGTH, TARGET_LENGTH_STEP,
};
use crate::proposal::synthesizer::SUPPORTED_DOMAINS;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthOption {
    pub words: u32,
    pub label: LengthLabel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalOptionsResponse {
    pub tones: Vec<Tone>,
    pub platforms: Vec<Platform>,
    pub supported_domains: Vec<&'static str>,
    pub length: LengthRange,
    pub length_options: Vec<LengthOption>,
}

/// POST /api/v1/proposals
///
/// One-shot generation: validates, calls the configured backend and returns the text.
/// Unsupported job URLs come back as 400 with the user-facing message.
pub async fn handle_generate_proposal(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ProposalRequest>,
) -> Result<Json<ProposalResponse>, AppError> {
    request.validate()?;

    let proposal_text = state.backend.generate(&request).await?;

    Ok(Json(ProposalResponse {
        proposal_text,
        length_label: request.length_label(),
    }))
}

/// GET /api/v1/proposals/options
///
/// Everything a form needs to render its selectors.
pub async fn handle_proposal_options() -> Json<ProposalOptionsResponse> {
    let length_options = (MIN_TARGET_LENGTH..=MAX_TARGET_LENGTH)
        .step_by(TARGET_LENGTH_STEP as usize)
        .map(|words| LengthOption {
            words,
            label: LengthLabel::for_length(words),
        })
        .collect();

    Json(ProposalOptionsResponse {
        tones: Tone::SELECTABLE.to_vec(),
        platforms: Platform::selectable(),
        supported_domains: SUPPORTED_DOMAINS.to_vec(),
        length: LengthRange {
            min: MIN_TARGET_LENGTH,
            max: MAX_TARGET_LENGTH,
            step: TARGET_LENGTH_STEP,
            default: DEFAULT_TARGET_LENGTH,
        },
        length_options,
    })
}
