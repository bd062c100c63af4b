//! Pricing catalog. Static data; nothing here talks to a payment provider.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Starter,
    Professional,
    Business,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub tier: PlanTier,
    pub title: &'static str,
    pub description: &'static str,
    /// Effective monthly price in whole US dollars for the requested billing period.
    pub price_per_month_usd: u32,
    pub billing: BillingPeriod,
    /// `None` = unlimited.
    pub monthly_proposal_quota: Option<u32>,
    pub is_popular: bool,
    pub features: Vec<PlanFeature>,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Starter, PlanTier::Professional, PlanTier::Business];

    pub fn title(&self) -> &'static str {
        match self {
            PlanTier::Starter => "Starter",
            PlanTier::Professional => "Professional",
            PlanTier::Business => "Business",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlanTier::Starter => "Perfect for freelancers just getting started",
            PlanTier::Professional => "For active freelancers seeking more clients",
            PlanTier::Business => "For agencies and power users",
        }
    }

    /// Annual billing is 20% off the monthly list price.
    pub fn price_per_month_usd(&self, billing: BillingPeriod) -> u32 {
        let monthly = match self {
            PlanTier::Starter => 10,
            PlanTier::Professional => 20,
            PlanTier::Business => 40,
        };
        match billing {
            BillingPeriod::Monthly => monthly,
            BillingPeriod::Annual => monthly * 4 / 5,
        }
    }

    pub fn monthly_proposal_quota(&self) -> Option<u32> {
        match self {
            PlanTier::Starter => Some(50),
            PlanTier::Professional => Some(200),
            PlanTier::Business => None,
        }
    }

    pub fn features(&self) -> Vec<PlanFeature> {
        let (templates, tones, analysis) = match self {
            PlanTier::Starter => (
                "Basic proposal templates",
                "Professional tone",
                "Job description analysis",
            ),
            PlanTier::Professional | PlanTier::Business => (
                "All proposal templates",
                "All writing tones",
                "Advanced job analysis",
            ),
        };
        let quota = match self {
            PlanTier::Starter => "50 proposals per month",
            PlanTier::Professional => "200 proposals per month",
            PlanTier::Business => "Unlimited proposals",
        };
        let paid = *self != PlanTier::Starter;

        vec![
            PlanFeature { text: quota, included: true },
            PlanFeature { text: templates, included: true },
            PlanFeature { text: tones, included: true },
            PlanFeature { text: analysis, included: true },
            PlanFeature { text: "Editable proposals", included: true },
            PlanFeature { text: "Advanced customization", included: paid },
            PlanFeature { text: "Priority support", included: paid },
            PlanFeature {
                text: "Custom branding",
                included: *self == PlanTier::Business,
            },
        ]
    }

    pub fn summary(&self, billing: BillingPeriod) -> PlanSummary {
        PlanSummary {
            tier: *self,
            title: self.title(),
            description: self.description(),
            price_per_month_usd: self.price_per_month_usd(billing),
            billing,
            monthly_proposal_quota: self.monthly_proposal_quota(),
            is_popular: *self == PlanTier::Professional,
            features: self.features(),
        }
    }
}

/// All plans priced for one billing period, cheapest first.
pub fn catalog(billing: BillingPeriod) -> Vec<PlanSummary> {
    PlanTier::ALL.iter().map(|tier| tier.summary(billing)).collect()
}
