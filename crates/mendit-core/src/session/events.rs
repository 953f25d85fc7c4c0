//! Broadcast bus for live session updates.
//!
//! Built on `tokio::sync::broadcast`. Publishing with no active subscribers
//! is a no-op.

use mendit_types::chat::{ChatMessage, SessionStatus};
use tokio::sync::broadcast;

/// Something a front end rendering the session should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    MessagePosted {
        session_id: String,
        message: ChatMessage,
    },
    TypingChanged {
        session_id: String,
        user_id: String,
        is_typing: bool,
    },
    StatusChanged {
        session_id: String,
        status: SessionStatus,
    },
}

/// Multi-consumer event bus for session updates.
///
/// Cloning the bus clones the sender.
#[derive(Clone)]
pub struct SessionEventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new(256)
    }
}

impl SessionEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receiver for all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SessionEvent) {
        let _ = self.sender.send(event);
    }
}

impl std::fmt::Debug for SessionEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEventBus")
            .field("receiver_count", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posted(text: &str) -> SessionEvent {
        SessionEvent::MessagePosted {
            session_id: "ABC123".to_string(),
            message: ChatMessage::system(text),
        }
    }

    #[tokio::test]
    async fn publish_and_subscribe_delivers_event() {
        let bus = SessionEventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(posted("hello"));

        match rx.recv().await.unwrap() {
            SessionEvent::MessagePosted { message, .. } => assert_eq!(message.message, "hello"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn multiple_subscribers_each_receive_event() {
        let bus = SessionEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(SessionEvent::StatusChanged {
            session_id: "ABC123".to_string(),
            status: SessionStatus::Resolved,
        });

        assert!(matches!(rx1.recv().await.unwrap(), SessionEvent::StatusChanged { .. }));
        assert!(matches!(rx2.recv().await.unwrap(), SessionEvent::StatusChanged { .. }));
    }

    #[test]
    fn publish_without_subscribers_is_noop() {
        let bus = SessionEventBus::default();
        bus.publish(posted("nobody listening"));
    }

    #[test]
    fn clone_shares_channel() {
        let bus = SessionEventBus::new(16);
        let bus2 = bus.clone();
        let mut rx = bus.subscribe();

        bus2.publish(posted("via clone"));
        assert!(rx.try_recv().is_ok());
        assert!(format!("{bus:?}").contains("receiver_count"));
    }
}
