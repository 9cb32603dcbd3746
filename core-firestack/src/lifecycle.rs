//! # Lifecycle Forwarding
//!
//! Re-emits host foreground/background transitions as named events with a
//! boolean payload. Two states, driven by host notifications: resume maps
//! to foreground, pause to background; destroy is accepted and ignored.
//! Transitions are not deduplicated - two consecutive resumes emit two
//! events - and no initial event fires at subscription time.

use std::sync::Mutex;

use tracing::debug;

use crate::events::{BridgeEvent, EventBus};

/// App lifecycle state as seen by the forwarder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Foreground,
    Background,
}

/// Forwards host lifecycle notifications onto the event bus.
pub struct LifecycleForwarder {
    bus: EventBus,
    state: Mutex<Option<LifecycleState>>,
}

impl LifecycleForwarder {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            state: Mutex::new(None),
        }
    }

    /// Last observed state; `None` until the first host notification.
    pub fn state(&self) -> Option<LifecycleState> {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn transition(&self, state: LifecycleState) {
        {
            let mut current = self
                .state
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *current = Some(state);
        }

        let is_foreground = state == LifecycleState::Foreground;
        debug!(is_foreground, "Forwarding app state transition");
        // No subscriber yet is fine; the host may attach later.
        self.bus.emit(BridgeEvent::AppState { is_foreground }).ok();
    }

    /// Host signaled resume.
    pub fn host_resumed(&self) {
        self.transition(LifecycleState::Foreground);
    }

    /// Host signaled pause.
    pub fn host_paused(&self) {
        self.transition(LifecycleState::Background);
    }

    /// Host signaled destroy. Accepted and ignored: no teardown action and
    /// no event.
    pub fn host_destroyed(&self) {
        debug!("Host destroy notification ignored");
    }
}
