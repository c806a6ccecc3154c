//! In-memory mocks for the store ports
//!
//! Both mocks can be told to fail so tests can check that store errors are
//! logged rather than rolled back.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rizzmaster_core::{ProfileStore, SavedItemStore};
use rizzmaster_domain::{Profile, Result as DomainResult, RizzError, SavedItem};

#[derive(Default, Clone)]
pub struct MockProfileStore {
    profiles: Arc<Mutex<HashMap<String, Profile>>>,
    saves: Arc<Mutex<Vec<Profile>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles.lock().insert(profile.id.clone(), profile);
        self
    }

    pub fn failing_writes(self) -> Self {
        *self.fail_writes.lock() = true;
        self
    }

    pub fn stored(&self, id: &str) -> Option<Profile> {
        self.profiles.lock().get(id).cloned()
    }

    /// Overwrite the stored copy without recording a `save` call.
    pub fn save_direct(&self, profile: Profile) {
        self.profiles.lock().insert(profile.id.clone(), profile);
    }

    /// Every profile passed to `save`, in call order.
    pub fn saves(&self) -> Vec<Profile> {
        self.saves.lock().clone()
    }

    fn check_writable(&self) -> DomainResult<()> {
        if *self.fail_writes.lock() {
            return Err(RizzError::Network("backend offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn load(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(self.stored(user_id))
    }

    async fn create(&self, profile: Profile) -> DomainResult<Profile> {
        self.check_writable()?;
        self.profiles.lock().insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn save(&self, profile: &Profile) -> DomainResult<()> {
        self.saves.lock().push(profile.clone());
        self.check_writable()?;
        self.profiles.lock().insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.profiles.lock().remove(user_id);
        Ok(())
    }
}

/// Saved-items mock that assigns `srv-N` ids, like a remote backend would.
#[derive(Default, Clone)]
pub struct MockSavedItemStore {
    items: Arc<Mutex<Vec<SavedItem>>>,
    next_id: Arc<Mutex<u32>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MockSavedItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, item: SavedItem) -> Self {
        self.items.lock().push(item);
        self
    }

    pub fn failing_writes(self) -> Self {
        *self.fail_writes.lock() = true;
        self
    }

    pub fn items(&self) -> Vec<SavedItem> {
        self.items.lock().clone()
    }

    fn check_writable(&self) -> DomainResult<()> {
        if *self.fail_writes.lock() {
            return Err(RizzError::Network("backend offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SavedItemStore for MockSavedItemStore {
    async fn list_saved(&self, user_id: &str) -> DomainResult<Vec<SavedItem>> {
        let mut items: Vec<_> =
            self.items.lock().iter().filter(|item| item.user_id == user_id).cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn upsert_saved(&self, mut item: SavedItem) -> DomainResult<SavedItem> {
        self.check_writable()?;
        let mut next = self.next_id.lock();
        *next += 1;
        item.id = format!("srv-{next}");
        self.items.lock().insert(0, item.clone());
        Ok(item)
    }

    async fn delete_saved(&self, id: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.items.lock().retain(|item| item.id != id);
        Ok(())
    }

    async fn delete_all_saved(&self, user_id: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.items.lock().retain(|item| item.user_id != user_id);
        Ok(())
    }
}
