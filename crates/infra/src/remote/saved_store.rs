//! `saved_items` table over PostgREST

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::Method;
use rizzmaster_core::store::SavedItemStore;
use rizzmaster_domain::{Result as DomainResult, SavedItem, SavedItemKind};
use serde::Serialize;

use super::client::{eq, RemoteClient};
use crate::http::ensure_success;

const SAVED_PATH: &str = "rest/v1/saved_items";

/// Insert body; the server assigns `id` and `created_at`.
#[derive(Serialize)]
struct NewSavedItem<'a> {
    user_id: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    kind: SavedItemKind,
}

#[derive(Clone)]
pub struct RemoteSavedItemStore {
    client: RemoteClient,
}

impl RemoteSavedItemStore {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }

    async fn delete_where(&self, column: &str, value: &str) -> DomainResult<()> {
        let url = self.client.url(SAVED_PATH, &[(column, &eq(value))])?;
        let response = self.client.http().send(self.client.request(Method::DELETE, url)).await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SavedItemStore for RemoteSavedItemStore {
    async fn list_saved(&self, user_id: &str) -> DomainResult<Vec<SavedItem>> {
        let url = self.client.url(
            SAVED_PATH,
            &[("user_id", &eq(user_id)), ("select", "*"), ("order", "created_at.desc")],
        )?;
        self.client.http().send_json(self.client.request(Method::GET, url)).await
    }

    async fn upsert_saved(&self, item: SavedItem) -> DomainResult<SavedItem> {
        let url = self.client.url(SAVED_PATH, &[])?;
        let body = NewSavedItem { user_id: &item.user_id, content: &item.content, kind: item.kind };
        let request = self
            .client
            .request_single(Method::POST, url)
            .header("Prefer", HeaderValue::from_static("return=representation"))
            .json(&body);
        self.client.http().send_json(request).await
    }

    async fn delete_saved(&self, id: &str) -> DomainResult<()> {
        self.delete_where("id", id).await
    }

    async fn delete_all_saved(&self, user_id: &str) -> DomainResult<()> {
        self.delete_where("user_id", user_id).await
    }
}
