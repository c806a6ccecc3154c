//! Stand-ins for ad and store SDKs on platforms that have neither

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rizzmaster_core::{PurchaseProvider, RewardAdProvider, UserConfirmation};
use rizzmaster_domain::constants::PREMIUM_PRICE_LABEL;
use rizzmaster_domain::{CreditsConfig, EntitlementStatus, Result as DomainResult, RewardOutcome};
use tracing::info;

const SIMULATED_AD_PROMPT: &str = "You are in Web Mode. Simulate watching an Ad?";

/// Rewarded "ad" that asks the user whether to pretend one was watched.
pub struct SimulatedAds {
    confirmation: Arc<dyn UserConfirmation>,
}

impl SimulatedAds {
    pub fn new(confirmation: Arc<dyn UserConfirmation>) -> Self {
        Self { confirmation }
    }
}

#[async_trait]
impl RewardAdProvider for SimulatedAds {
    async fn show_rewarded_ad(&self) -> DomainResult<RewardOutcome> {
        let outcome = if self.confirmation.confirm(SIMULATED_AD_PROMPT).await {
            RewardOutcome::Rewarded
        } else {
            RewardOutcome::Declined
        };
        info!(outcome = ?outcome, "billing.simulated_ad");
        Ok(outcome)
    }
}

/// Premium purchase that always succeeds after a fixed processing delay.
///
/// Restore reports `Active` only for a purchase made through this instance.
pub struct SimulatedPurchases {
    delay: Duration,
    purchased: AtomicBool,
}

impl SimulatedPurchases {
    pub fn new(delay: Duration) -> Self {
        Self { delay, purchased: AtomicBool::new(false) }
    }

    pub fn from_config(config: &CreditsConfig) -> Self {
        Self::new(Duration::from_millis(config.purchase_delay_ms))
    }

    async fn processing(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl PurchaseProvider for SimulatedPurchases {
    async fn purchase_premium(&self) -> DomainResult<EntitlementStatus> {
        self.processing().await;
        self.purchased.store(true, Ordering::SeqCst);
        info!(price = PREMIUM_PRICE_LABEL, "billing.simulated_purchase");
        Ok(EntitlementStatus::Active)
    }

    async fn restore_purchases(&self) -> DomainResult<EntitlementStatus> {
        self.processing().await;
        Ok(if self.purchased.load(Ordering::SeqCst) {
            EntitlementStatus::Active
        } else {
            EntitlementStatus::Inactive
        })
    }
}

/// Confirmation with a preset answer, for headless runs.
pub struct FixedConfirmation(pub bool);

#[async_trait]
impl UserConfirmation for FixedConfirmation {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
