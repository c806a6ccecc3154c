//! Port interface for the cross-context session topic

use async_trait::async_trait;
use rizzmaster_domain::{EndpointId, Result, SessionMessage};

/// One endpoint on the named session topic.
///
/// Implementations must never deliver an endpoint's own announcements back
/// to it.
#[async_trait]
pub trait SessionChannel: Send + Sync {
    fn endpoint_id(&self) -> EndpointId;

    /// Publish `SessionStarted` tagged with this endpoint's id and return
    /// the sequence number the topic stamped on it. Sequence numbers are
    /// strictly increasing across all endpoints of a topic.
    fn announce(&self) -> Result<u64>;

    /// Wait for the next message from another endpoint; `Ok(None)` once the
    /// topic is closed.
    async fn recv(&self) -> Result<Option<SessionMessage>>;

    /// Next already-delivered message, without waiting.
    fn try_recv(&self) -> Result<Option<SessionMessage>>;
}
