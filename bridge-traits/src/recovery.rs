//! Recovery Prompt and Process Control
//!
//! Seams for the user-facing half of the service-layer recovery flow: the
//! modal prompt the platform presents for resolvable failures, and the
//! process-level actions (relaunch, exit) the host integration layer applies
//! once the flow has decided an outcome.

use std::time::Duration;

use crate::error::Result;

/// Request code reserved for the service-layer resolution activity.
///
/// Activity results carrying this code signal that the user completed the
/// recovery flow and the application must restart to pick up the repaired
/// service layer.
pub const RESOLUTION_REQUEST_CODE: i32 = 9000;

/// Modal recovery prompt for user-resolvable service-layer failures.
///
/// # Platform Support
///
/// - **Android**: `GoogleApiAvailability.getErrorDialog` tied to the current
///   activity
/// - **Desktop**: not available; implementations return
///   [`BridgeError::NotAvailable`](crate::BridgeError::NotAvailable)
#[async_trait::async_trait]
pub trait RecoveryPrompt: Send + Sync {
    /// Present the modal prompt for the given failure and wait for the user
    /// to dismiss it.
    ///
    /// Resolves only when the user cancels the prompt. If the user instead
    /// launches and completes the resolution activity, the host delivers an
    /// activity result through its own channel and this future is dropped
    /// unresolved. There is no timeout; a prompt that cannot be dismissed
    /// waits indefinitely.
    async fn present(&self, status_code: i32, message: &str) -> Result<()>;
}

/// Process-level actions applied by the host integration layer.
///
/// The recovery flow itself never exits the process; it reports an outcome,
/// and the host applies it through this trait. Keeping the side effects
/// behind a seam makes the flow testable without real termination.
pub trait ProcessController: Send + Sync {
    /// Schedule a relaunch of the host application after `delay`.
    ///
    /// Returns immediately; the delay must not be served on the calling
    /// thread. The platform cannot relaunch an activity synchronously while
    /// it is exiting, so the launch is deferred (a self-targeted alarm on
    /// Android, a detached child process on desktop).
    fn schedule_relaunch(&self, delay: Duration);

    /// Terminate the current process instance. Does not return on real
    /// platforms; test doubles record the call instead.
    fn exit(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingController {
        exits: AtomicUsize,
        relaunches: AtomicUsize,
    }

    impl ProcessController for CountingController {
        fn schedule_relaunch(&self, _delay: Duration) {
            self.relaunches.fetch_add(1, Ordering::SeqCst);
        }

        fn exit(&self) {
            self.exits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_controller_double_records_calls() {
        let controller = CountingController {
            exits: AtomicUsize::new(0),
            relaunches: AtomicUsize::new(0),
        };

        controller.schedule_relaunch(Duration::from_millis(100));
        controller.exit();

        assert_eq!(controller.relaunches.load(Ordering::SeqCst), 1);
        assert_eq!(controller.exits.load(Ordering::SeqCst), 1);
    }
}
