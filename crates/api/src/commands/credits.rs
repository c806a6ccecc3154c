//! Credits, rewarded ads and premium

use rizzmaster_core::{cost_of, decide, AdRewardOutcome, GateDecision};
use rizzmaster_domain::{EntitlementStatus, RequestKind, Result as DomainResult};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Preview the gate for an action without charging.
pub async fn check_entitlement(
    ctx: &AppContext,
    kind: RequestKind,
    has_image: bool,
) -> DomainResult<GateDecision> {
    execute_command(ctx, "credits::check_entitlement", || async {
        let profile = ctx.session.require_profile()?;
        Ok(decide(&profile, cost_of(kind, has_image)))
    })
    .await
}

pub async fn watch_ad(ctx: &AppContext) -> DomainResult<AdRewardOutcome> {
    execute_command(ctx, "credits::watch_ad", || ctx.billing.watch_ad()).await
}

pub async fn upgrade_premium(ctx: &AppContext) -> DomainResult<EntitlementStatus> {
    execute_command(ctx, "credits::upgrade_premium", || ctx.billing.upgrade()).await
}

pub async fn restore_purchases(ctx: &AppContext) -> DomainResult<EntitlementStatus> {
    execute_command(ctx, "credits::restore_purchases", || ctx.billing.restore()).await
}
