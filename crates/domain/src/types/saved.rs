//! Saved lines and bios

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of generated text was saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavedItemKind {
    Tease,
    Smooth,
    Chaotic,
    Bio,
}

crate::impl_wire_name_conversions!(SavedItemKind {
    Tease => "tease",
    Smooth => "smooth",
    Chaotic => "chaotic",
    Bio => "bio",
});

/// An entry in the content-addressed saved list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedItem {
    pub id: String,
    /// Weak owner reference; not enforced locally.
    pub user_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: SavedItemKind,
    pub created_at: DateTime<Utc>,
}

impl SavedItem {
    /// Client-side item with a placeholder id, replaced by the backend id once
    /// a remote insert succeeds.
    pub fn placeholder(
        user_id: impl Into<String>,
        content: impl Into<String>,
        kind: SavedItemKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            content: content.into(),
            kind,
            created_at,
        }
    }
}
