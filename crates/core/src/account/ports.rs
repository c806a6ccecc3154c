//! Port interface for the remote identity provider

use async_trait::async_trait;
use rizzmaster_domain::{OAuthProvider, Result};
use serde::{Deserialize, Serialize};

/// Authenticated identity returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Email/password and redirect-based (OAuth) authentication.
///
/// Adapters keep the access token themselves and hand it to the stores; core
/// code never sees it.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Register; `Ok(None)` when the provider requires email confirmation
    /// before a session exists.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Option<AuthUser>>;

    async fn sign_out(&self) -> Result<()>;

    /// Where to send the user to sign in with `provider`; the provider
    /// redirects back to `redirect_to` with an access token.
    fn oauth_authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String>;

    /// Adopt the access token from an OAuth redirect and resolve its user.
    async fn complete_oauth(&self, access_token: &str) -> Result<AuthUser>;
}
