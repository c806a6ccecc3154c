//! Credit top-ups and the premium upgrade

use std::sync::Arc;

use rizzmaster_domain::constants::{MSG_ADS_UNAVAILABLE, REWARD_CREDITS};
use rizzmaster_domain::{EntitlementStatus, Profile, Result, RewardOutcome};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::{PurchaseProvider, RewardAdProvider};
use crate::credits::CreditLedger;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdRewardOutcome {
    Rewarded { credits: u32, profile: Profile },
    Declined,
    /// Provider error; credits unchanged.
    Unavailable { message: String },
}

pub struct BillingService {
    ledger: CreditLedger,
    ads: Arc<dyn RewardAdProvider>,
    purchases: Arc<dyn PurchaseProvider>,
}

impl BillingService {
    pub fn new(
        ledger: CreditLedger,
        ads: Arc<dyn RewardAdProvider>,
        purchases: Arc<dyn PurchaseProvider>,
    ) -> Self {
        Self { ledger, ads, purchases }
    }

    /// Show a rewarded ad and grant [`REWARD_CREDITS`] if it was watched.
    pub async fn watch_ad(&self) -> Result<AdRewardOutcome> {
        match self.ads.show_rewarded_ad().await {
            Ok(RewardOutcome::Rewarded) => {
                let profile = self.ledger.reward(REWARD_CREDITS).await?;
                info!(user_id = %profile.id, credits = REWARD_CREDITS, "billing.ad_rewarded");
                Ok(AdRewardOutcome::Rewarded { credits: REWARD_CREDITS, profile })
            }
            Ok(RewardOutcome::Declined) => Ok(AdRewardOutcome::Declined),
            Err(err) => {
                warn!(error = %err, "billing.ad_failed");
                Ok(AdRewardOutcome::Unavailable { message: MSG_ADS_UNAVAILABLE.to_string() })
            }
        }
    }

    /// Buy premium; an active entitlement flips the profile flag.
    pub async fn upgrade(&self) -> Result<EntitlementStatus> {
        let status = self.purchases.purchase_premium().await?;
        self.apply(status, "purchase").await
    }

    pub async fn restore(&self) -> Result<EntitlementStatus> {
        let status = self.purchases.restore_purchases().await?;
        self.apply(status, "restore").await
    }

    async fn apply(&self, status: EntitlementStatus, source: &'static str) -> Result<EntitlementStatus> {
        if status == EntitlementStatus::Active {
            let profile = self.ledger.set_premium().await?;
            info!(user_id = %profile.id, source, "billing.premium_activated");
        }
        Ok(status)
    }
}
