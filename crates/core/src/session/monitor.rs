//! Single-active-session monitor
//!
//! Protocol: on start an instance announces `SessionStarted` and is
//! `Active`. Hearing a later announcement from another endpoint blocks it.
//! `reclaim` re-announces and returns to `Active`. There is no heartbeat,
//! timeout or acknowledgement; whoever announced last wins, where "last" is
//! the topic's sequence order, not delivery order.

use std::sync::Arc;

use parking_lot::Mutex;
use rizzmaster_domain::{Result, RizzError, SessionMessage, SessionState};
use tokio::sync::watch;
use tracing::{debug, info};

use super::ports::SessionChannel;

pub struct SessionMonitor {
    channel: Arc<dyn SessionChannel>,
    state: watch::Sender<SessionState>,
    /// Sequence number of our latest announcement.
    claimed: Mutex<Option<u64>>,
}

impl SessionMonitor {
    pub fn new(channel: Arc<dyn SessionChannel>) -> Self {
        let (state, _) = watch::channel(SessionState::Active);
        Self { channel, state, claimed: Mutex::new(None) }
    }

    /// Claim the session for this instance.
    pub fn start(&self) -> Result<()> {
        self.announce()?;
        info!(endpoint = %self.channel.endpoint_id(), "session.started");
        Ok(())
    }

    /// Re-assert this instance as the active session after being blocked.
    pub fn reclaim(&self) -> Result<()> {
        self.announce()?;
        info!(endpoint = %self.channel.endpoint_id(), "session.reclaimed");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Watch for state changes (e.g. to swap the UI for the blocked screen).
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Fails with [`RizzError::SessionBlocked`] while another context owns
    /// the session.
    pub fn ensure_active(&self) -> Result<()> {
        match self.state() {
            SessionState::Active => Ok(()),
            SessionState::Blocked => Err(RizzError::SessionBlocked(
                "Rizz Master is open in another window".to_string(),
            )),
        }
    }

    /// Apply one message from the topic. Announcements older than our own
    /// latest claim are ignored.
    pub fn handle(&self, message: SessionMessage) {
        if message.origin() == self.channel.endpoint_id() {
            return;
        }
        let claimed = self.claimed.lock();
        if claimed.is_some_and(|seq| message.seq() <= seq) {
            debug!(
                endpoint = %self.channel.endpoint_id(),
                by = %message.origin(),
                seq = message.seq(),
                "session.stale_announcement"
            );
            return;
        }
        let blocked = self.state.send_if_modified(|state| match state {
            SessionState::Blocked => false,
            SessionState::Active => {
                *state = SessionState::Blocked;
                true
            }
        });
        if blocked {
            info!(
                endpoint = %self.channel.endpoint_id(),
                by = %message.origin(),
                "session.blocked"
            );
        }
    }

    /// Process every message already delivered; returns how many were seen.
    pub fn drain(&self) -> Result<usize> {
        let mut seen = 0;
        while let Some(message) = self.channel.try_recv()? {
            self.handle(message);
            seen += 1;
        }
        Ok(seen)
    }

    /// Listen until the topic closes. Intended to be spawned.
    pub async fn run(self: Arc<Self>) -> Result<()> {
        while let Some(message) = self.channel.recv().await? {
            self.handle(message);
        }
        debug!(endpoint = %self.channel.endpoint_id(), "session.topic_closed");
        Ok(())
    }

    fn announce(&self) -> Result<()> {
        // Held across publish and state change so a newer peer message
        // handled concurrently cannot be overwritten by our `Active`.
        let mut claimed = self.claimed.lock();
        let seq = self.channel.announce()?;
        *claimed = Some(seq);
        self.state.send_replace(SessionState::Active);
        Ok(())
    }
}
