//! Entitlement and reward outcomes reported by billing/ad collaborators

use serde::{Deserialize, Serialize};

/// Premium subscription state returned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntitlementStatus {
    Active,
    Inactive,
}

/// Result of presenting a rewarded ad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardOutcome {
    Rewarded,
    Declined,
}
