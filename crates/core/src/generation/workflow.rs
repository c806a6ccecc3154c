//! Priced generation: validate, gate, charge, generate, refund on failure
//!
//! Ordering within one request: the debit happens before the model call, and
//! the model call happens before either success or the refund.

use std::sync::Arc;
use std::time::Duration;

use rizzmaster_domain::constants::{
    MSG_BIO_NEEDS_INPUT, MSG_CHAT_NEEDS_CONTEXT, MSG_GENERATION_FAILED, REVIEW_PROMPT_INTERVAL,
};
use rizzmaster_domain::{GenerationRequest, GenerationResult, Result, RizzError};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::GenerationService;
use crate::credits::CreditLedger;
use crate::entitlement::{cost_for_request, decide, GateDecision, Paywall};
use crate::state::SessionHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Generated {
        result: GenerationResult,
        /// Ask for a store review after this result.
        request_review: bool,
    },
    /// Not enough credits; nothing was debited.
    Paywall(Paywall),
    /// The model call failed and the charge was refunded. Retryable.
    Failed { message: String },
}

pub struct GenerationWorkflow {
    session: SessionHandle,
    ledger: CreditLedger,
    generator: Arc<dyn GenerationService>,
    free_tier_delay: Duration,
}

impl GenerationWorkflow {
    pub fn new(
        session: SessionHandle,
        ledger: CreditLedger,
        generator: Arc<dyn GenerationService>,
    ) -> Self {
        Self {
            session,
            ledger,
            generator,
            free_tier_delay: Duration::ZERO,
        }
    }

    /// Delay non-premium requests before the model call.
    pub fn with_free_tier_delay(mut self, delay: Duration) -> Self {
        self.free_tier_delay = delay;
        self
    }

    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationOutcome> {
        validate(&request)?;

        let profile = self.session.require_profile()?;
        let cost = cost_for_request(&request);
        if let GateDecision::Blocked(paywall) = decide(&profile, cost) {
            info!(user_id = %profile.id, cost, available = paywall.available, "generation.paywall");
            return Ok(GenerationOutcome::Paywall(paywall));
        }

        let charge = self.ledger.charge(cost).await?;
        if !profile.is_premium && !self.free_tier_delay.is_zero() {
            tokio::time::sleep(self.free_tier_delay).await;
        }

        match self.generator.generate(&request).await {
            Ok(result) => {
                let count = self.session.record_generation();
                let request_review = count % REVIEW_PROMPT_INTERVAL == 0;
                info!(
                    user_id = %profile.id,
                    kind = ?request.kind(),
                    charged = charge.amount,
                    request_review,
                    "generation.completed"
                );
                Ok(GenerationOutcome::Generated { result, request_review })
            }
            Err(err) => {
                warn!(error = %err, user_id = %profile.id, refund = charge.amount, "generation.failed");
                self.ledger.refund(&charge).await?;
                Ok(GenerationOutcome::Failed { message: MSG_GENERATION_FAILED.to_string() })
            }
        }
    }
}

fn validate(request: &GenerationRequest) -> Result<()> {
    match request {
        GenerationRequest::Chat { text, .. } if text.trim().is_empty() && !request.has_image() => {
            Err(RizzError::InvalidInput(MSG_CHAT_NEEDS_CONTEXT.to_string()))
        }
        GenerationRequest::Bio { about } if about.trim().is_empty() => {
            Err(RizzError::InvalidInput(MSG_BIO_NEEDS_INPUT.to_string()))
        }
        _ => Ok(()),
    }
}
