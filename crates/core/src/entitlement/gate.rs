//! Entitlement gate
//!
//! Decides whether a priced action may proceed. The gate never mutates
//! anything; debits happen in the ledger afterwards.

use rizzmaster_domain::Profile;
use serde::Serialize;

/// Upgrade/ad prompt shown instead of running the action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paywall {
    pub cost: u32,
    pub available: u32,
    /// Shortfall notice when the user has some credits, just not enough.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Allow,
    Blocked(Paywall),
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

pub fn decide(profile: &Profile, cost: u32) -> GateDecision {
    if profile.is_premium || profile.credits >= cost {
        return GateDecision::Allow;
    }

    let available = profile.credits;
    let notice =
        (available > 0).then(|| format!("Cost: {cost} credits. You have {available}."));
    GateDecision::Blocked(Paywall { cost, available, notice })
}
