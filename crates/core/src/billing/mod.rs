//! Rewarded ads and premium purchases

pub mod ports;
pub mod service;

pub use ports::{PurchaseProvider, RewardAdProvider, UserConfirmation};
pub use service::{AdRewardOutcome, BillingService};
