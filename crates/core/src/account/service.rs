//! Account lifecycle: guest and remote sign-in, profile load, logout,
//! account deletion

use std::sync::Arc;

use rizzmaster_domain::constants::{GUEST_EMAIL, GUEST_USER_ID};
use rizzmaster_domain::{OAuthProvider, Profile, Result, RizzError};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::{AuthGateway, AuthUser};
use crate::clock::Clock;
use crate::credits::apply_reset;
use crate::state::SessionHandle;
use crate::store::{ProfileStore, SavedItemStore};

const MSG_BACKEND_UNAVAILABLE: &str = "Backend unavailable. Please continue as guest.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SignUpOutcome {
    SignedIn(Profile),
    /// Account created; the user must confirm their email before signing in.
    ConfirmationRequired,
}

pub struct AccountService {
    session: SessionHandle,
    profiles: Arc<dyn ProfileStore>,
    saved: Arc<dyn SavedItemStore>,
    clock: Arc<dyn Clock>,
    auth: Option<Arc<dyn AuthGateway>>,
}

impl AccountService {
    pub fn new(
        session: SessionHandle,
        profiles: Arc<dyn ProfileStore>,
        saved: Arc<dyn SavedItemStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { session, profiles, saved, clock, auth: None }
    }

    /// Enable email/password and provider accounts (remote backend only).
    pub fn with_auth(mut self, auth: Arc<dyn AuthGateway>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn supports_accounts(&self) -> bool {
        self.auth.is_some()
    }

    pub async fn login_guest(&self) -> Result<Profile> {
        self.load_user(GUEST_USER_ID, GUEST_EMAIL).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Profile> {
        let auth = self.auth()?;
        let user = auth.sign_in(email, password).await?;
        info!(user_id = %user.id, "account.signed_in");
        self.load_user(&user.id, &user.email).await
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome> {
        let auth = self.auth()?;
        match auth.sign_up(email, password).await? {
            Some(AuthUser { id, email }) => {
                info!(user_id = %id, "account.signed_up");
                Ok(SignUpOutcome::SignedIn(self.load_user(&id, &email).await?))
            }
            None => Ok(SignUpOutcome::ConfirmationRequired),
        }
    }

    /// Provider sign-in page to open; the redirect brings back a token for
    /// [`Self::complete_oauth`].
    pub fn oauth_authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String> {
        self.auth()?.oauth_authorize_url(provider, redirect_to)
    }

    pub async fn complete_oauth(&self, access_token: &str) -> Result<Profile> {
        let auth = self.auth()?;
        let user = auth.complete_oauth(access_token).await?;
        info!(user_id = %user.id, "account.oauth_signed_in");
        self.load_user(&user.id, &user.email).await
    }

    /// Load (or create) the profile, apply the daily reset, load saved items
    /// and install them in the session.
    pub async fn load_user(&self, user_id: &str, email: &str) -> Result<Profile> {
        let today = self.clock.today();
        let loaded = match self.profiles.load(user_id).await? {
            Some(profile) => profile,
            None => {
                info!(user_id, "account.profile_created");
                self.profiles.create(Profile::new(user_id, email, today)).await?
            }
        };

        let stale_date = loaded.last_daily_reset;
        let profile = apply_reset(loaded, today);
        if profile.last_daily_reset != stale_date {
            info!(user_id, from = %stale_date, to = %today, "account.daily_reset");
            if let Err(err) = self.profiles.save(&profile).await {
                warn!(error = %err, user_id, "account.reset_persist_failed");
            }
        }

        let saved = match self.saved.list_saved(user_id).await {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, user_id, "account.saved_load_failed");
                Vec::new()
            }
        };

        self.session.sign_in(profile.clone(), saved);
        Ok(profile)
    }

    /// Sign out of the provider (if any) and clear session state.
    pub async fn logout(&self) {
        if let Some(auth) = &self.auth {
            if let Err(err) = auth.sign_out().await {
                warn!(error = %err, "account.sign_out_failed");
            }
        }
        self.session.clear();
        info!("account.logged_out");
    }

    /// Remove the user's saved items and profile, then log out.
    pub async fn delete_account(&self) -> Result<()> {
        let profile = self.session.require_profile()?;
        self.saved.delete_all_saved(&profile.id).await?;
        self.profiles.delete(&profile.id).await?;
        info!(user_id = %profile.id, "account.deleted");
        self.logout().await;
        Ok(())
    }

    fn auth(&self) -> Result<&Arc<dyn AuthGateway>> {
        self.auth.as_ref().ok_or_else(|| RizzError::Auth(MSG_BACKEND_UNAVAILABLE.to_string()))
    }
}
