//! Session exclusivity states and messages

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether this context currently owns the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Active,
    /// Another context announced after us.
    Blocked,
}

crate::impl_wire_name_conversions!(SessionState {
    Active => "active",
    Blocked => "blocked",
});

/// Identity of one participant on the session topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointId(pub Uuid);

impl EndpointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EndpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The only message on the topic; reclaim reuses it.
///
/// `seq` is assigned by the topic and grows with every announcement, so
/// receivers can order claims regardless of delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionMessage {
    SessionStarted { origin: EndpointId, seq: u64 },
}

impl SessionMessage {
    pub fn origin(&self) -> EndpointId {
        match self {
            Self::SessionStarted { origin, .. } => *origin,
        }
    }

    pub fn seq(&self) -> u64 {
        match self {
            Self::SessionStarted { seq, .. } => *seq,
        }
    }
}
