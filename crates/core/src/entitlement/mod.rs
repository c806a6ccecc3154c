//! Entitlement gate and cost schedule

pub mod gate;
pub mod pricing;

pub use gate::{decide, GateDecision, Paywall};
pub use pricing::{cost_for_request, cost_of};
