use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::account::plans::{BillingPeriod, PlanTier};

/// Per-session account state. Lives exactly as long as the session that owns it.
/// Cosmetic only: nothing in generation reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContext {
    pub plan: Option<PlanTier>,
    pub billing: Option<BillingPeriod>,
    pub activated_at: Option<DateTime<Utc>>,
}

impl AccountContext {
    pub fn is_premium(&self) -> bool {
        self.plan.is_some()
    }

    /// Replaces any previous plan.
    pub fn activate(&mut self, plan: PlanTier, billing: BillingPeriod) {
        self.plan = Some(plan);
        self.billing = Some(billing);
        self.activated_at = Some(Utc::now());
    }
}
