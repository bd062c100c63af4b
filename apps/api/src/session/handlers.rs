//! Axum route handlers for the Session API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::proposal::models::ProposalRequest;
use crate::session::store::SessionView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProposalRequest {
    pub proposal_text: String,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session.view().await))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(session_id).await?;
    Ok(Json(session.view().await))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/generate
///
/// Kicks off generation and returns immediately with the session in `generating`.
/// Poll GET /api/v1/sessions/:id for the outcome.
pub async fn handle_start_generation(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<ProposalRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    request.validate()?;

    let session = state.sessions.get(session_id).await?;
    // Settlement is observed through the session state, not the handle.
    drop(session.generation.start(request).await);

    Ok((StatusCode::ACCEPTED, Json(session.view().await)))
}

/// PUT /api/v1/sessions/:id/proposal
pub async fn handle_edit_proposal(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<EditProposalRequest>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(session_id).await?;
    session.generation.edit(request.proposal_text).await?;
    Ok(Json(session.view().await))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(session_id).await?;
    session.generation.reset().await;
    Ok(Json(session.view().await))
}
