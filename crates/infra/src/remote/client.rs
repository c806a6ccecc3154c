//! Client for the hosted auth/database service
//!
//! The service speaks PostgREST under `/rest/v1` and GoTrue under
//! `/auth/v1`. Every request carries the anon key as `apikey`; the bearer is
//! the signed-in user's access token, or the anon key before sign-in.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use rizzmaster_domain::{BackendConfig, Result as DomainResult, RizzError};
use url::Url;

use crate::http::HttpClient;

/// Accept header asking PostgREST for a single JSON object instead of an
/// array; zero rows then come back as 406 / `PGRST116`.
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
pub const NO_ROWS_CODE: &str = "PGRST116";

/// Shared connection details plus the current access token.
#[derive(Clone)]
pub struct RemoteClient {
    http: HttpClient,
    base_url: Url,
    anon_key: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl RemoteClient {
    pub fn new(base_url: &str, anon_key: &str) -> DomainResult<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(20))
            .max_attempts(2)
            .build()?;
        Self::with_http(base_url, anon_key, http)
    }

    pub fn with_http(base_url: &str, anon_key: &str, http: HttpClient) -> DomainResult<Self> {
        // Trailing slash so `join` appends instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| RizzError::Config(format!("Invalid backend URL {base_url}: {e}")))?;
        Ok(Self {
            http,
            base_url,
            anon_key: anon_key.to_string(),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Build from config; `None` when the backend is not configured.
    pub fn from_config(config: &BackendConfig) -> DomainResult<Option<Self>> {
        match (&config.url, &config.anon_key) {
            (Some(url), Some(key)) if config.is_configured() => Self::new(url, key).map(Some),
            _ => Ok(None),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write() = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.read().clone()
    }

    /// `{base}/{path}` with `query` pairs appended (values are encoded).
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> DomainResult<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| RizzError::Internal(format!("Invalid endpoint path {path}: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Request with `apikey` and bearer headers set.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self.access_token().unwrap_or_else(|| self.anon_key.clone());
        self.http.request(method, url).headers(self.auth_headers(&bearer))
    }

    /// Same as [`request`](Self::request), asking for a single object.
    pub fn request_single(&self, method: Method, url: Url) -> RequestBuilder {
        self.request(method, url).header(ACCEPT, SINGLE_OBJECT)
    }

    fn auth_headers(&self, bearer: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(mut value) = HeaderValue::from_str(&format!("Bearer {bearer}")) {
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }
}

/// PostgREST filter value for equality.
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}
