//! In-process session topics over `tokio::sync::broadcast`
//!
//! Every context that joins the same named topic on one [`SessionHub`] hears
//! the others' announcements. Delivery is best effort: a receiver that lags
//! past the channel capacity loses the oldest messages. Each topic stamps
//! announcements with its own increasing sequence number.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use rizzmaster_core::SessionChannel;
use rizzmaster_domain::{EndpointId, Result as DomainResult, SessionConfig, SessionMessage};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

#[derive(Clone)]
struct Topic {
    sender: broadcast::Sender<SessionMessage>,
    next_seq: Arc<AtomicU64>,
}

/// Registry of named topics
#[derive(Clone)]
pub struct SessionHub {
    capacity: usize,
    topics: Arc<Mutex<HashMap<String, Topic>>>,
}

impl SessionHub {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), topics: Arc::new(Mutex::new(HashMap::new())) }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.channel_capacity)
    }

    /// Join `topic` as a new endpoint with a fresh id.
    pub fn join(&self, topic: &str) -> Arc<BroadcastEndpoint> {
        let Topic { sender, next_seq } = {
            let mut topics = self.topics.lock();
            topics
                .entry(topic.to_string())
                .or_insert_with(|| Topic {
                    sender: broadcast::channel(self.capacity).0,
                    next_seq: Arc::new(AtomicU64::new(1)),
                })
                .clone()
        };
        let receiver = sender.subscribe();
        let id = EndpointId::new();
        debug!(topic, endpoint = %id, "session.endpoint_joined");
        Arc::new(BroadcastEndpoint {
            id,
            sender,
            next_seq,
            receiver: tokio::sync::Mutex::new(receiver),
        })
    }
}

/// One context's handle on a topic
pub struct BroadcastEndpoint {
    id: EndpointId,
    sender: broadcast::Sender<SessionMessage>,
    next_seq: Arc<AtomicU64>,
    receiver: tokio::sync::Mutex<broadcast::Receiver<SessionMessage>>,
}

impl BroadcastEndpoint {
    fn is_own(&self, message: &SessionMessage) -> bool {
        message.origin() == self.id
    }
}

#[async_trait]
impl SessionChannel for BroadcastEndpoint {
    fn endpoint_id(&self) -> EndpointId {
        self.id
    }

    fn announce(&self) -> DomainResult<u64> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        // Err only means nobody is subscribed, which cannot happen while we
        // hold our own receiver.
        let _ = self.sender.send(SessionMessage::SessionStarted { origin: self.id, seq });
        Ok(seq)
    }

    async fn recv(&self) -> DomainResult<Option<SessionMessage>> {
        let mut receiver = self.receiver.lock().await;
        loop {
            match receiver.recv().await {
                Ok(message) if self.is_own(&message) => continue,
                Ok(message) => return Ok(Some(message)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(endpoint = %self.id, skipped, "session.receiver_lagged");
                }
                Err(RecvError::Closed) => return Ok(None),
            }
        }
    }

    fn try_recv(&self) -> DomainResult<Option<SessionMessage>> {
        // A pending `recv` holds the receiver; it will see the message itself.
        let Ok(mut receiver) = self.receiver.try_lock() else {
            return Ok(None);
        };
        loop {
            match receiver.try_recv() {
                Ok(message) if self.is_own(&message) => continue,
                Ok(message) => return Ok(Some(message)),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(endpoint = %self.id, skipped, "session.receiver_lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rizzmaster_core::SessionMonitor;
    use rizzmaster_domain::SessionState;

    use super::*;

    #[test]
    fn own_announcements_are_not_delivered() {
        let hub = SessionHub::new(8);
        let endpoint = hub.join("topic");

        endpoint.announce().unwrap();

        assert_eq!(endpoint.try_recv().unwrap(), None);
    }

    #[test]
    fn peers_on_same_topic_hear_each_other() {
        let hub = SessionHub::new(8);
        let a = hub.join("topic");
        let b = hub.join("topic");
        let other = hub.join("elsewhere");

        let seq = a.announce().unwrap();

        assert_eq!(
            b.try_recv().unwrap(),
            Some(SessionMessage::SessionStarted { origin: a.endpoint_id(), seq })
        );
        assert_eq!(other.try_recv().unwrap(), None);
    }

    #[test]
    fn sequence_grows_across_endpoints_of_a_topic() {
        let hub = SessionHub::new(8);
        let a = hub.join("topic");
        let b = hub.join("topic");
        let other = hub.join("elsewhere");

        let first = a.announce().unwrap();
        let second = b.announce().unwrap();
        let third = a.announce().unwrap();

        assert!(first < second && second < third);
        assert_eq!(other.announce().unwrap(), 1);
    }

    #[test]
    fn lagging_receiver_still_sees_latest() {
        let hub = SessionHub::new(2);
        let a = hub.join("topic");
        let b = hub.join("topic");

        for _ in 0..5 {
            a.announce().unwrap();
        }

        assert!(b.try_recv().unwrap().is_some());
    }

    #[test]
    fn second_monitor_blocks_the_first() {
        let hub = SessionHub::new(8);
        let first = SessionMonitor::new(hub.join("topic"));
        let second = SessionMonitor::new(hub.join("topic"));

        first.start().unwrap();
        second.start().unwrap();
        first.drain().unwrap();

        assert_eq!(first.state(), SessionState::Blocked);
        assert_eq!(second.state(), SessionState::Active);

        first.reclaim().unwrap();
        second.drain().unwrap();
        assert_eq!(first.state(), SessionState::Active);
        assert_eq!(second.state(), SessionState::Blocked);
    }

    #[tokio::test]
    async fn running_monitor_reacts_to_peer() {
        let hub = SessionHub::new(8);
        let first = Arc::new(SessionMonitor::new(hub.join("topic")));
        first.start().unwrap();
        let mut state = first.subscribe();
        let task = tokio::spawn(Arc::clone(&first).run());

        SessionMonitor::new(hub.join("topic")).start().unwrap();
        state.changed().await.unwrap();

        assert_eq!(*state.borrow(), SessionState::Blocked);
        task.abort();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn reclaim_survives_announcements_still_in_flight() {
        let hub = SessionHub::new(16);
        let monitors: Vec<Arc<SessionMonitor>> =
            (0..3).map(|_| Arc::new(SessionMonitor::new(hub.join("topic")))).collect();
        let [a, b, c] = [&monitors[0], &monitors[1], &monitors[2]];
        a.start().unwrap();
        let tasks: Vec<_> = monitors.iter().map(|m| tokio::spawn(Arc::clone(m).run())).collect();

        b.start().unwrap();
        tokio::task::yield_now().await;
        c.start().unwrap();
        a.reclaim().unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let states: Vec<SessionState> = monitors.iter().map(|m| m.state()).collect();
        assert_eq!(states, [SessionState::Active, SessionState::Blocked, SessionState::Blocked]);
        for task in tasks {
            task.abort();
        }
    }

    #[test]
    fn late_delivery_of_an_older_claim_is_ignored() {
        let hub = SessionHub::new(8);
        let first = SessionMonitor::new(hub.join("topic"));
        let second = SessionMonitor::new(hub.join("topic"));

        second.start().unwrap();
        first.start().unwrap();
        // `first` only now sees `second`'s earlier claim.
        first.drain().unwrap();
        second.drain().unwrap();

        assert_eq!(first.state(), SessionState::Active);
        assert_eq!(second.state(), SessionState::Blocked);
    }
}
