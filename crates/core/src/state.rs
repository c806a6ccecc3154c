//! In-memory session state
//!
//! What the user sees is this state, not the store: mutations land here first
//! and are written through afterwards. Every service that touches credits or
//! the saved list receives the same [`SessionHandle`] explicitly.

use std::sync::Arc;

use parking_lot::RwLock;
use rizzmaster_domain::{Profile, RizzError, Result, SavedItem};

#[derive(Debug, Default)]
struct UserSession {
    profile: Option<Profile>,
    saved: Vec<SavedItem>,
    successful_generations: u32,
}

/// Shared handle to the signed-in user's state.
///
/// Cloning is cheap; all clones observe the same state. Locks are held only
/// for the duration of a closure and never across an await point.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<UserSession>>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded profile and saved list.
    pub fn sign_in(&self, profile: Profile, saved: Vec<SavedItem>) {
        let mut state = self.inner.write();
        state.profile = Some(profile);
        state.saved = saved;
        state.successful_generations = 0;
    }

    /// Drop everything tied to the current user.
    pub fn clear(&self) {
        *self.inner.write() = UserSession::default();
    }

    pub fn profile(&self) -> Option<Profile> {
        self.inner.read().profile.clone()
    }

    /// Current profile, or an auth error when nobody is signed in.
    pub fn require_profile(&self) -> Result<Profile> {
        self.profile().ok_or_else(|| RizzError::Auth("No active session".to_string()))
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.read().profile.is_some()
    }

    /// Apply `f` to the live profile and return a snapshot of the result.
    pub fn update_profile<F>(&self, f: F) -> Result<Profile>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let mut state = self.inner.write();
        let profile = state
            .profile
            .as_mut()
            .ok_or_else(|| RizzError::Auth("No active session".to_string()))?;
        f(profile)?;
        Ok(profile.clone())
    }

    pub fn saved(&self) -> Vec<SavedItem> {
        self.inner.read().saved.clone()
    }

    pub fn find_saved_by_content(&self, content: &str) -> Option<SavedItem> {
        self.inner.read().saved.iter().find(|item| item.content == content).cloned()
    }

    pub fn prepend_saved(&self, item: SavedItem) {
        self.inner.write().saved.insert(0, item);
    }

    /// Remove by id; returns whether anything was removed.
    pub fn remove_saved(&self, id: &str) -> bool {
        let mut state = self.inner.write();
        let before = state.saved.len();
        state.saved.retain(|item| item.id != id);
        state.saved.len() != before
    }

    /// Count a successful generation and return the running total.
    pub fn record_generation(&self) -> u32 {
        let mut state = self.inner.write();
        state.successful_generations = state.successful_generations.saturating_add(1);
        state.successful_generations
    }
}
