//! Port interfaces for rewarded ads and in-app purchases

use async_trait::async_trait;
use rizzmaster_domain::{EntitlementStatus, Result, RewardOutcome};

/// Shows a rewarded ad and reports whether the reward was earned.
#[async_trait]
pub trait RewardAdProvider: Send + Sync {
    async fn show_rewarded_ad(&self) -> Result<RewardOutcome>;
}

/// Yes/no prompt to the user, used where no ad SDK is available.
#[async_trait]
pub trait UserConfirmation: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Store billing for the premium subscription
#[async_trait]
pub trait PurchaseProvider: Send + Sync {
    async fn purchase_premium(&self) -> Result<EntitlementStatus>;

    async fn restore_purchases(&self) -> Result<EntitlementStatus>;
}
