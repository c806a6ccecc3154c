//! Email/password and OAuth sign-in against the hosted auth service

use async_trait::async_trait;
use reqwest::Method;
use rizzmaster_core::account::{AuthGateway, AuthUser};
use rizzmaster_domain::{OAuthProvider, Result as DomainResult, RizzError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::client::RemoteClient;
use crate::http::ensure_success;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct UserRecord {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Token grant; sign-up responses without a session carry only the user.
#[derive(Deserialize)]
struct SessionResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<UserRecord>,
}

/// `AuthGateway` that stores the granted access token on the shared
/// [`RemoteClient`], so the REST stores act as the signed-in user.
#[derive(Clone)]
pub struct RemoteAuth {
    client: RemoteClient,
}

impl RemoteAuth {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    fn session_user(&self, session: SessionResponse, fallback_email: &str) -> Option<AuthUser> {
        let token = session.access_token?;
        let user = session.user?;
        self.client.set_access_token(Some(token));
        Some(AuthUser { id: user.id, email: user.email.unwrap_or_else(|| fallback_email.to_string()) })
    }
}

#[async_trait]
impl AuthGateway for RemoteAuth {
    async fn sign_in(&self, email: &str, password: &str) -> DomainResult<AuthUser> {
        let url = self.client.url("auth/v1/token", &[("grant_type", "password")])?;
        let request = self.client.request(Method::POST, url).json(&Credentials { email, password });
        let session: SessionResponse = self.client.http().send_json(request).await?;

        let user = self
            .session_user(session, email)
            .ok_or_else(|| RizzError::Auth("Sign-in response did not include a session".into()))?;
        info!(user_id = %user.id, "auth.signed_in");
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> DomainResult<Option<AuthUser>> {
        let url = self.client.url("auth/v1/signup", &[])?;
        let request = self.client.request(Method::POST, url).json(&Credentials { email, password });
        let session: SessionResponse = self.client.http().send_json(request).await?;

        let user = self.session_user(session, email);
        match &user {
            Some(user) => info!(user_id = %user.id, "auth.signed_up"),
            None => info!("auth.confirmation_required"),
        }
        Ok(user)
    }

    async fn sign_out(&self) -> DomainResult<()> {
        if self.client.access_token().is_none() {
            return Ok(());
        }
        let url = self.client.url("auth/v1/logout", &[])?;
        let result = async {
            let response = self.client.http().send(self.client.request(Method::POST, url)).await?;
            ensure_success(response).await.map(|_| ())
        }
        .await;

        // The local session ends even when the revoke call fails.
        self.client.set_access_token(None);
        if let Err(err) = &result {
            warn!(error = %err, "auth.sign_out_failed");
        }
        result
    }

    fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> DomainResult<String> {
        let url = self.client.url(
            "auth/v1/authorize",
            &[("provider", provider.as_str()), ("redirect_to", redirect_to)],
        )?;
        Ok(url.into())
    }

    async fn complete_oauth(&self, access_token: &str) -> DomainResult<AuthUser> {
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(RizzError::Auth("Missing access token from sign-in redirect".into()));
        }

        self.client.set_access_token(Some(access_token.to_string()));
        let url = self.client.url("auth/v1/user", &[])?;
        match self.client.http().send_json::<UserRecord>(self.client.request(Method::GET, url)).await {
            Ok(user) => {
                info!(user_id = %user.id, "auth.oauth_completed");
                Ok(AuthUser { id: user.id, email: user.email.unwrap_or_default() })
            }
            Err(err) => {
                self.client.set_access_token(None);
                warn!(error = %err, "auth.oauth_failed");
                Err(err)
            }
        }
    }
}
