//! # Host Event Bus
//!
//! Broadcast channel carrying adapter events to the host runtime, built on
//! `tokio::sync::broadcast`. Multiple host-side subscribers can listen
//! independently; slow subscribers receive `RecvError::Lagged` rather than
//! blocking emitters.

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Event name the host runtime registers for app-state transitions.
pub const APP_STATE_EVENT: &str = "FirestackAppState";

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Events emitted by the adapter toward the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", content = "payload")]
pub enum BridgeEvent {
    /// Foreground/background transition. Emitted on every host lifecycle
    /// notification, without deduplication.
    AppState {
        #[serde(rename = "isForeground")]
        is_foreground: bool,
    },
}

impl BridgeEvent {
    /// The named channel the host runtime receives this event on.
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::AppState { .. } => APP_STATE_EVENT,
        }
    }
}

/// Event bus for publishing adapter events to host subscribers.
///
/// Cloning the bus yields another producer over the same channel; each
/// `subscribe()` call creates an independent receiver. Past events are not
/// replayed to new subscribers.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<BridgeEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an
    /// error when no subscriber is listening.
    pub fn emit(&self, event: BridgeEvent) -> Result<usize, SendError<BridgeEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber to receive future events.
    pub fn subscribe(&self) -> Receiver<BridgeEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}
