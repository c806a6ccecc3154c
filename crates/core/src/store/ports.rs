//! Port interfaces for profile and saved-item persistence
//!
//! These traits define the boundary between the credit/session logic and the
//! two storage backends (remote REST service, local guest store). Callers
//! never learn which one they are talking to.

use async_trait::async_trait;
use rizzmaster_domain::{Profile, Result, SavedItem};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a profile; `Ok(None)` means it does not exist yet.
    async fn load(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Create a profile, returning what the backend stored.
    async fn create(&self, profile: Profile) -> Result<Profile>;

    /// Overwrite the mutable fields (credits, premium flag, reset date).
    async fn save(&self, profile: &Profile) -> Result<()>;

    /// Delete a profile by user id
    async fn delete(&self, user_id: &str) -> Result<()>;
}

/// Trait for the content-addressed saved list
#[async_trait]
pub trait SavedItemStore: Send + Sync {
    /// All items owned by `user_id`, newest first.
    async fn list_saved(&self, user_id: &str) -> Result<Vec<SavedItem>>;

    /// Store an item; remote backends return it with the server-assigned id.
    async fn upsert_saved(&self, item: SavedItem) -> Result<SavedItem>;

    async fn delete_saved(&self, id: &str) -> Result<()>;

    /// Remove every item owned by `user_id`
    async fn delete_all_saved(&self, user_id: &str) -> Result<()>;
}
