//! Storage backend selection
//!
//! Chosen once at startup: the hosted service when both its URL and anon key
//! are configured, otherwise the local guest store. The rest of the app only
//! sees the store ports.

use std::sync::Arc;

use rizzmaster_core::{AuthGateway, ProfileStore, SavedItemStore};
use rizzmaster_domain::{Config, Result as DomainResult};
use tracing::info;

use crate::database::{DbManager, GuestProfileStore, GuestSavedItemStore, LocalKvStore};
use crate::remote::{RemoteAuth, RemoteClient, RemoteProfileStore, RemoteSavedItemStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Remote,
    Local,
}

impl BackendKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Remote => "remote",
            BackendKind::Local => "local",
        }
    }
}

#[derive(Clone)]
pub struct Backend {
    pub kind: BackendKind,
    pub profiles: Arc<dyn ProfileStore>,
    pub saved: Arc<dyn SavedItemStore>,
    /// Present only for the hosted backend.
    pub auth: Option<Arc<dyn AuthGateway>>,
    db: Option<Arc<DbManager>>,
}

impl Backend {
    pub fn select(config: &Config) -> DomainResult<Self> {
        let backend = match RemoteClient::from_config(&config.backend)? {
            Some(client) => Self::remote(client),
            None => Self::local(&config.storage.path, config.storage.pool_size)?,
        };
        info!(backend = backend.kind.as_str(), "backend.selected");
        Ok(backend)
    }

    pub fn remote(client: RemoteClient) -> Self {
        Self {
            kind: BackendKind::Remote,
            profiles: Arc::new(RemoteProfileStore::new(client.clone())),
            saved: Arc::new(RemoteSavedItemStore::new(client.clone())),
            auth: Some(Arc::new(RemoteAuth::new(client))),
            db: None,
        }
    }

    /// Open (and migrate) the local store at `path`.
    pub fn local(path: &str, pool_size: u32) -> DomainResult<Self> {
        let db = Arc::new(DbManager::new(path, pool_size)?);
        db.run_migrations()?;
        let kv = LocalKvStore::new(Arc::clone(&db));
        Ok(Self {
            kind: BackendKind::Local,
            profiles: Arc::new(GuestProfileStore::new(kv.clone())),
            saved: Arc::new(GuestSavedItemStore::new(kv)),
            auth: None,
            db: Some(db),
        })
    }

    /// Local: the database answers a query. Remote: nothing to check
    /// without a signed-in user.
    pub fn health_check(&self) -> DomainResult<()> {
        match &self.db {
            Some(db) => db.health_check(),
            None => Ok(()),
        }
    }
}
