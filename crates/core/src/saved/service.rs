//! Saved-items service
//!
//! The saved list is content-addressed: toggling the same text twice leaves
//! membership unchanged. The in-memory list is authoritative for the user;
//! store failures are logged and the local change stands.

use std::sync::Arc;

use rizzmaster_domain::{Result, SavedItem, SavedItemKind};
use tracing::warn;

use crate::clock::Clock;
use crate::state::SessionHandle;
use crate::store::SavedItemStore;

/// What a toggle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveToggle {
    Saved(SavedItem),
    Removed(SavedItem),
}

pub struct SavedItemsService {
    session: SessionHandle,
    store: Arc<dyn SavedItemStore>,
    clock: Arc<dyn Clock>,
}

impl SavedItemsService {
    pub fn new(
        session: SessionHandle,
        store: Arc<dyn SavedItemStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { session, store, clock }
    }

    /// Remove `content` if it is saved, otherwise save it.
    pub async fn toggle_save(&self, content: &str, kind: SavedItemKind) -> Result<SaveToggle> {
        let profile = self.session.require_profile()?;

        if let Some(existing) = self.session.find_saved_by_content(content) {
            if let Err(err) = self.store.delete_saved(&existing.id).await {
                warn!(error = %err, item_id = %existing.id, "saved.delete_failed");
            }
            self.session.remove_saved(&existing.id);
            return Ok(SaveToggle::Removed(existing));
        }

        let mut item = SavedItem::placeholder(&profile.id, content, kind, self.clock.now());
        match self.store.upsert_saved(item.clone()).await {
            Ok(stored) => item.id = stored.id,
            Err(err) => warn!(error = %err, item_id = %item.id, "saved.insert_failed"),
        }
        self.session.prepend_saved(item.clone());
        Ok(SaveToggle::Saved(item))
    }

    /// Delete by id; unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.session.require_profile()?;
        if let Err(err) = self.store.delete_saved(id).await {
            warn!(error = %err, item_id = %id, "saved.delete_failed");
        }
        self.session.remove_saved(id);
        Ok(())
    }

    pub fn is_saved(&self, content: &str) -> bool {
        self.session.find_saved_by_content(content).is_some()
    }

    /// Newest first.
    pub fn list(&self) -> Vec<SavedItem> {
        self.session.saved()
    }
}
