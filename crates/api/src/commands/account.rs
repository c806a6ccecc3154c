//! Sign-in, sign-up and account removal

use rizzmaster_core::SignUpOutcome;
use rizzmaster_domain::{OAuthProvider, Profile, Result as DomainResult, RizzError};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Continue without an account; uses whichever store was selected at
/// startup.
pub async fn login_guest(ctx: &AppContext) -> DomainResult<Profile> {
    execute_command(ctx, "account::login_guest", || ctx.account.login_guest()).await
}

pub async fn sign_in(ctx: &AppContext, email: &str, password: &str) -> DomainResult<Profile> {
    execute_command(ctx, "account::sign_in", || ctx.account.sign_in(email.trim(), password)).await
}

pub async fn sign_up(ctx: &AppContext, email: &str, password: &str) -> DomainResult<SignUpOutcome> {
    execute_command(ctx, "account::sign_up", || ctx.account.sign_up(email.trim(), password)).await
}

/// Provider sign-in page for the UI to open. `provider` is the wire name
/// (`google`).
pub async fn oauth_authorize_url(
    ctx: &AppContext,
    provider: &str,
    redirect_to: &str,
) -> DomainResult<String> {
    execute_command(ctx, "account::oauth_authorize_url", || async {
        let provider: OAuthProvider = provider.parse().map_err(RizzError::InvalidInput)?;
        ctx.account.oauth_authorize_url(provider, redirect_to)
    })
    .await
}

/// Finish a provider sign-in with the access token from the redirect.
pub async fn complete_oauth(ctx: &AppContext, access_token: &str) -> DomainResult<Profile> {
    execute_command(ctx, "account::complete_oauth", || ctx.account.complete_oauth(access_token)).await
}

pub async fn logout(ctx: &AppContext) -> DomainResult<()> {
    execute_command(ctx, "account::logout", || async {
        ctx.account.logout().await;
        Ok(())
    })
    .await
}

/// Remove saved items and profile from the store, then log out.
pub async fn delete_account(ctx: &AppContext) -> DomainResult<()> {
    execute_command(ctx, "account::delete_account", || ctx.account.delete_account()).await
}

/// Signed-in profile, or `None` before login.
pub async fn current_profile(ctx: &AppContext) -> DomainResult<Option<Profile>> {
    execute_command(ctx, "account::current_profile", || async { Ok(ctx.session.profile()) }).await
}

/// Whether accounts (email/password or provider sign-in) are available;
/// hosted backend only.
pub fn accounts_enabled(ctx: &AppContext) -> bool {
    ctx.account.supports_accounts()
}
