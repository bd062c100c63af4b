//! Axum route handlers for plans and the simulated checkout.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::account::plans::{catalog, BillingPeriod, PlanSummary, PlanTier};
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlansQuery {
    #[serde(default)]
    pub billing: BillingPeriod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub plan: PlanTier,
    #[serde(default)]
    pub billing: BillingPeriod,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub session_id: Uuid,
    pub plan: PlanTier,
    pub billing: BillingPeriod,
    pub price_per_month_usd: u32,
    pub activated_at: DateTime<Utc>,
}

/// GET /api/v1/plans?billing=monthly|annual
pub async fn handle_list_plans(ApiQuery(params): ApiQuery<PlansQuery>) -> Json<Vec<PlanSummary>> {
    Json(catalog(params.billing))
}

/// POST /api/v1/sessions/:id/checkout
///
/// Simulated: waits the configured processing delay, then activates the plan on the
/// session's account. No payment is taken.
pub async fn handle_checkout(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<CheckoutRequest>,
) -> Result<Json<CheckoutReceipt>, AppError> {
    let session = state.sessions.get(session_id).await?;

    let delay = state.config.checkout_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let mut account = session.account.write().await;
    account.activate(request.plan, request.billing);
    let activated_at = account.activated_at.unwrap_or_else(Utc::now);

    info!(
        "Session {session_id}: activated {} plan ({:?})",
        request.plan.title(),
        request.billing
    );

    Ok(Json(CheckoutReceipt {
        session_id,
        plan: request.plan,
        billing: request.billing,
        price_per_month_usd: request.plan.price_per_month_usd(request.billing),
        activated_at,
    }))
}
