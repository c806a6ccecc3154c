//! Guest-mode profile and saved-items stores
//!
//! One device, one guest: the profile lives under `guest_profile` and the
//! saved list under `guest_saved_items`, with no partitioning by user id.

use async_trait::async_trait;
use rizzmaster_core::store::{ProfileStore, SavedItemStore};
use rizzmaster_domain::constants::{GUEST_PROFILE_KEY, GUEST_SAVED_ITEMS_KEY};
use rizzmaster_domain::{Profile, Result as DomainResult, SavedItem};

use super::kv_store::LocalKvStore;

/// `ProfileStore` over the local key-value table
#[derive(Clone)]
pub struct GuestProfileStore {
    kv: LocalKvStore,
}

impl GuestProfileStore {
    pub fn new(kv: LocalKvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl ProfileStore for GuestProfileStore {
    async fn load(&self, _user_id: &str) -> DomainResult<Option<Profile>> {
        self.kv.get(GUEST_PROFILE_KEY).await
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        self.kv.put(GUEST_PROFILE_KEY, &profile).await?;
        Ok(profile)
    }

    async fn save(&self, profile: &Profile) -> DomainResult<()> {
        self.kv.put(GUEST_PROFILE_KEY, profile).await
    }

    async fn delete(&self, _user_id: &str) -> DomainResult<()> {
        self.kv.remove(&[GUEST_PROFILE_KEY]).await
    }
}

/// `SavedItemStore` over the local key-value table
#[derive(Clone)]
pub struct GuestSavedItemStore {
    kv: LocalKvStore,
}

impl GuestSavedItemStore {
    pub fn new(kv: LocalKvStore) -> Self {
        Self { kv }
    }
}

#[async_trait]
impl SavedItemStore for GuestSavedItemStore {
    async fn list_saved(&self, _user_id: &str) -> DomainResult<Vec<SavedItem>> {
        Ok(self.kv.get(GUEST_SAVED_ITEMS_KEY).await?.unwrap_or_default())
    }

    /// Prepends, or replaces in place when the id is already stored.
    async fn upsert_saved(&self, item: SavedItem) -> DomainResult<SavedItem> {
        let stored = item.clone();
        self.kv
            .update(GUEST_SAVED_ITEMS_KEY, move |items: &mut Vec<SavedItem>| {
                match items.iter_mut().find(|existing| existing.id == item.id) {
                    Some(existing) => *existing = item,
                    None => items.insert(0, item),
                }
            })
            .await?;
        Ok(stored)
    }

    async fn delete_saved(&self, id: &str) -> DomainResult<()> {
        let id = id.to_string();
        self.kv
            .update(GUEST_SAVED_ITEMS_KEY, move |items: &mut Vec<SavedItem>| {
                items.retain(|item| item.id != id);
            })
            .await
    }

    async fn delete_all_saved(&self, _user_id: &str) -> DomainResult<()> {
        self.kv.remove(&[GUEST_SAVED_ITEMS_KEY]).await
    }
}
