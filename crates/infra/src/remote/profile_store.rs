//! `profiles` table over PostgREST

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::HeaderValue;
use reqwest::{Method, StatusCode};
use rizzmaster_core::store::ProfileStore;
use rizzmaster_domain::{Profile, Result as DomainResult};
use serde::Serialize;
use tracing::debug;

use super::client::{eq, RemoteClient, NO_ROWS_CODE};
use crate::errors::{status_to_error, InfraError};
use crate::http::{ensure_success, error_detail};

const PROFILES_PATH: &str = "rest/v1/profiles";

/// Columns written by [`ProfileStore::save`]; id and email never change.
#[derive(Serialize)]
struct ProfilePatch {
    credits: u32,
    is_premium: bool,
    last_daily_reset: NaiveDate,
}

#[derive(Clone)]
pub struct RemoteProfileStore {
    client: RemoteClient,
}

impl RemoteProfileStore {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileStore for RemoteProfileStore {
    async fn load(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let url = self.client.url(PROFILES_PATH, &[("id", &eq(user_id)), ("select", "*")])?;
        let response = self.client.http().send(self.client.request_single(Method::GET, url)).await?;

        let status = response.status();
        if status == StatusCode::NOT_ACCEPTABLE {
            let body = response.text().await.unwrap_or_default();
            if body.contains(NO_ROWS_CODE) {
                debug!(user_id, "profile.not_found");
                return Ok(None);
            }
            return Err(status_to_error(status, error_detail(&body).as_deref()));
        }

        let response = ensure_success(response).await?;
        let profile = response.json::<Profile>().await.map_err(InfraError::from)?;
        Ok(Some(profile))
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        let url = self.client.url(PROFILES_PATH, &[])?;
        let request = self
            .client
            .request_single(Method::POST, url)
            .header("Prefer", HeaderValue::from_static("return=representation"))
            .json(&profile);
        self.client.http().send_json(request).await
    }

    async fn save(&self, profile: &Profile) -> DomainResult<()> {
        let url = self.client.url(PROFILES_PATH, &[("id", &eq(&profile.id))])?;
        let patch = ProfilePatch {
            credits: profile.credits,
            is_premium: profile.is_premium,
            last_daily_reset: profile.last_daily_reset,
        };
        let response = self.client.http().send(self.client.request(Method::PATCH, url).json(&patch)).await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        let url = self.client.url(PROFILES_PATH, &[("id", &eq(user_id))])?;
        let response = self.client.http().send(self.client.request(Method::DELETE, url)).await?;
        ensure_success(response).await?;
        Ok(())
    }
}
