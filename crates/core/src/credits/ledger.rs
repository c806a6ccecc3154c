//! Credit ledger - debits, refunds, rewards and the premium flip
//!
//! Every mutation is applied to the in-memory session first and then written
//! through to the [`ProfileStore`]. Store failures are logged and never rolled
//! back; the in-memory balance is what the user experiences.

use std::sync::Arc;

use rizzmaster_domain::{Profile, RizzError, Result};
use tracing::{debug, warn};

use crate::state::SessionHandle;
use crate::store::ProfileStore;

/// Receipt for a debit, consumed by [`CreditLedger::refund`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a charge should be kept so it can be refunded on failure"]
pub struct Charge {
    pub user_id: String,
    /// Credits actually taken; zero for premium profiles.
    pub amount: u32,
    pub balance_after: u32,
}

/// Explicit operations over the session's credit balance
#[derive(Clone)]
pub struct CreditLedger {
    session: SessionHandle,
    profiles: Arc<dyn ProfileStore>,
}

impl CreditLedger {
    pub fn new(session: SessionHandle, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { session, profiles }
    }

    /// Debit `cost` from the live balance.
    ///
    /// Premium profiles are never debited. A non-premium profile that cannot
    /// afford `cost` yields [`RizzError::InsufficientCredits`] and nothing
    /// changes; callers are expected to consult the gate first.
    pub async fn charge(&self, cost: u32) -> Result<Charge> {
        let mut amount = 0;
        let snapshot = self.session.update_profile(|profile| {
            if profile.is_premium {
                return Ok(());
            }
            if profile.credits < cost {
                return Err(RizzError::InsufficientCredits { cost, available: profile.credits });
            }
            profile.credits -= cost;
            amount = cost;
            Ok(())
        })?;

        if amount > 0 {
            self.persist(&snapshot, "charge").await;
        }
        debug!(user_id = %snapshot.id, amount, balance = snapshot.credits, "ledger.charged");

        Ok(Charge { user_id: snapshot.id, amount, balance_after: snapshot.credits })
    }

    /// Give back what `charge` took.
    ///
    /// Adds to the balance as it is now, so credits granted between the charge
    /// and the refund are kept.
    pub async fn refund(&self, charge: &Charge) -> Result<Profile> {
        if charge.amount == 0 {
            return self.session.require_profile();
        }
        let snapshot = self.session.update_profile(|profile| {
            if profile.id != charge.user_id {
                return Err(RizzError::InvalidInput(format!(
                    "Charge belongs to {}, active profile is {}",
                    charge.user_id, profile.id
                )));
            }
            profile.credits = profile.credits.saturating_add(charge.amount);
            Ok(())
        })?;
        self.persist(&snapshot, "refund").await;
        debug!(user_id = %snapshot.id, amount = charge.amount, balance = snapshot.credits, "ledger.refunded");
        Ok(snapshot)
    }

    /// Unconditional credit grant (rewarded ads).
    pub async fn reward(&self, amount: u32) -> Result<Profile> {
        let snapshot = self.session.update_profile(|profile| {
            profile.credits = profile.credits.saturating_add(amount);
            Ok(())
        })?;
        self.persist(&snapshot, "reward").await;
        Ok(snapshot)
    }

    /// One-way flip to premium.
    pub async fn set_premium(&self) -> Result<Profile> {
        let snapshot = self.session.update_profile(|profile| {
            profile.is_premium = true;
            Ok(())
        })?;
        self.persist(&snapshot, "set_premium").await;
        Ok(snapshot)
    }

    async fn persist(&self, profile: &Profile, operation: &'static str) {
        if let Err(err) = self.profiles.save(profile).await {
            warn!(
                error = %err,
                user_id = %profile.id,
                operation,
                "ledger.persist_failed"
            );
        }
    }
}
