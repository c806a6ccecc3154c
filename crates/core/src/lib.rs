//! # Rizz Master Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Credit rules (daily reset, ledger) and the entitlement gate
//! - Session exclusivity protocol
//! - Port/adapter interfaces (traits)
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `rizzmaster-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod account;
pub mod billing;
pub mod clock;
pub mod credits;
pub mod entitlement;
pub mod generation;
pub mod report;
pub mod saved;
pub mod session;
pub mod state;
pub mod store;

// Re-export specific items to avoid ambiguity
pub use account::{AccountService, AuthGateway, AuthUser, SignUpOutcome};
pub use billing::{
    AdRewardOutcome, BillingService, PurchaseProvider, RewardAdProvider, UserConfirmation,
};
pub use clock::Clock;
pub use credits::{apply_reset, should_reset, Charge, CreditLedger};
pub use entitlement::{cost_for_request, cost_of, decide, GateDecision, Paywall};
pub use generation::{GenerationOutcome, GenerationService, GenerationWorkflow};
pub use report::{ReportService, ReportSink};
pub use saved::{SaveToggle, SavedItemsService};
pub use session::{SessionChannel, SessionMonitor};
pub use state::SessionHandle;
pub use store::{ProfileStore, SavedItemStore};
