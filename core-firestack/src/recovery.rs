//! # Service-Layer Recovery Flow
//!
//! Drives the user-facing recovery path for unavailable service-layer
//! statuses. The flow itself is side-effect free: it resolves to a
//! [`RecoveryOutcome`], and the host integration layer applies the outcome
//! through the [`ProcessController`] seam. That split keeps the flow
//! testable without real process termination.
//!
//! ## Behavior
//!
//! - Resolvable failure: present the modal prompt and wait. Cancellation
//!   resolves to [`RecoveryOutcome::Terminate`]; an activity result carrying
//!   the reserved request code resolves to [`RecoveryOutcome::Restart`].
//!   Results with other request codes are ignored and the wait continues.
//! - Unresolvable failure: log and resolve to
//!   [`RecoveryOutcome::Continue`]; no process action is taken.
//!
//! There is no timeout and no cancellation token: a prompt that is never
//! dismissed waits indefinitely, matching the platform dialog semantics.

use std::time::Duration;

use bridge_traits::recovery::{ProcessController, RecoveryPrompt, RESOLUTION_REQUEST_CODE};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::availability::AvailabilityStatus;
use crate::error::{FirestackError, Result};

/// Delay before the relaunched instance starts.
pub const RESTART_DELAY: Duration = Duration::from_millis(100);

/// Activity-result notification delivered by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityResult {
    pub request_code: i32,
    /// Platform result code; the flow keys off the request code only.
    pub result_code: i32,
}

/// Terminal decision of a recovery flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// Nothing to recover (or unresolvable); the caller proceeds and simply
    /// reports the service layer as unavailable.
    Continue,
    /// Resolution succeeded; the application must relaunch.
    Restart,
    /// The user declined recovery; the process terminates.
    Terminate,
}

impl RecoveryOutcome {
    /// Apply this outcome through the process controller.
    ///
    /// `Restart` schedules exactly one deferred relaunch before terminating;
    /// `Terminate` exits without scheduling anything; `Continue` is a no-op.
    pub fn apply(self, process: &dyn ProcessController) {
        match self {
            RecoveryOutcome::Continue => {}
            RecoveryOutcome::Restart => {
                info!("Recovery resolved; scheduling relaunch");
                process.schedule_relaunch(RESTART_DELAY);
                process.exit();
            }
            RecoveryOutcome::Terminate => {
                info!("Recovery cancelled; terminating");
                process.exit();
            }
        }
    }
}

/// Run the recovery flow for `status`.
///
/// Invoked only for unavailable statuses; an available status short-circuits
/// to [`RecoveryOutcome::Continue`]. `activity_results` is the channel the
/// host delivers activity-result notifications on.
pub async fn run(
    status: &AvailabilityStatus,
    prompt: &dyn RecoveryPrompt,
    activity_results: &mut mpsc::UnboundedReceiver<ActivityResult>,
) -> Result<RecoveryOutcome> {
    if status.is_available {
        debug!("Recovery requested for available service layer");
        return Ok(RecoveryOutcome::Continue);
    }

    if !status.is_resolvable() {
        warn!(
            status_code = status.status_code,
            "Service layer unavailable and not user-resolvable"
        );
        return Ok(RecoveryOutcome::Continue);
    }

    let message = status.error.as_deref().unwrap_or("");
    let cancelled = prompt.present(status.status_code, message);
    tokio::pin!(cancelled);

    loop {
        tokio::select! {
            result = &mut cancelled => {
                result?;
                info!("Recovery prompt cancelled by user");
                return Ok(RecoveryOutcome::Terminate);
            }
            notification = activity_results.recv() => match notification {
                Some(result) if result.request_code == RESOLUTION_REQUEST_CODE => {
                    info!(result_code = result.result_code, "Resolution activity completed");
                    return Ok(RecoveryOutcome::Restart);
                }
                Some(result) => {
                    debug!(request_code = result.request_code, "Ignoring unrelated activity result");
                }
                None => {
                    return Err(FirestackError::Internal(
                        "Activity result channel closed during recovery".into(),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::BridgeError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn unavailable(resolvable: bool) -> AvailabilityStatus {
        AvailabilityStatus {
            status_code: 2,
            is_available: false,
            is_user_resolvable_error: Some(resolvable),
            error: Some("service error 2".to_string()),
        }
    }

    /// Prompt that resolves (user cancelled) as soon as it is presented.
    struct CancellingPrompt;

    #[async_trait]
    impl RecoveryPrompt for CancellingPrompt {
        async fn present(&self, _status_code: i32, _message: &str) -> bridge_traits::error::Result<()> {
            Ok(())
        }
    }

    /// Prompt that never resolves; the user keeps the dialog open.
    struct PendingPrompt;

    #[async_trait]
    impl RecoveryPrompt for PendingPrompt {
        async fn present(&self, _status_code: i32, _message: &str) -> bridge_traits::error::Result<()> {
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    struct FailingPrompt;

    #[async_trait]
    impl RecoveryPrompt for FailingPrompt {
        async fn present(&self, _status_code: i32, _message: &str) -> bridge_traits::error::Result<()> {
            Err(BridgeError::NotAvailable("no prompt UI".into()))
        }
    }

    #[derive(Default)]
    struct RecordingController {
        exits: AtomicUsize,
        relaunches: AtomicUsize,
    }

    impl ProcessController for RecordingController {
        fn schedule_relaunch(&self, delay: Duration) {
            assert_eq!(delay, RESTART_DELAY);
            self.relaunches.fetch_add(1, Ordering::SeqCst);
        }

        fn exit(&self) {
            self.exits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_cancellation_terminates() {
        let (_tx, mut rx) = mpsc::unbounded_channel();
        let outcome = run(&unavailable(true), &CancellingPrompt, &mut rx)
            .await
            .unwrap();
        assert_eq!(outcome, RecoveryOutcome::Terminate);
    }

    #[tokio::test]
    async fn test_matching_activity_result_restarts() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(ActivityResult {
            request_code: RESOLUTION_REQUEST_CODE,
            result_code: -1,
        })
        .unwrap();

        let outcome = run(&unavailable(true), &PendingPrompt, &mut rx)
            .await
            .unwrap();
        assert_eq!(outcome, RecoveryOutcome::Restart);
    }

    #[tokio::test]
    async fn test_unrelated_activity_result_is_ignored() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        tx.send(ActivityResult {
            request_code: 1234,
            result_code: -1,
        })
        .unwrap();
        tx.send(ActivityResult {
            request_code: RESOLUTION_REQUEST_CODE,
            result_code: -1,
        })
        .unwrap();

        let outcome = run(&unavailable(true), &PendingPrompt, &mut rx)
            .await
            .unwrap();
        assert_eq!(outcome, RecoveryOutcome::Restart);
    }

    #[tokio::test]
    async fn test_unresolvable_continues() {
        let (_tx, mut rx) = mpsc::unbounded_channel();
        let outcome = run(&unavailable(false), &PendingPrompt, &mut rx)
            .await
            .unwrap();
        assert_eq!(outcome, RecoveryOutcome::Continue);
    }

    #[tokio::test]
    async fn test_prompt_failure_propagates() {
        let (_tx, mut rx) = mpsc::unbounded_channel();
        let err = run(&unavailable(true), &FailingPrompt, &mut rx)
            .await
            .unwrap_err();
        assert!(matches!(err, FirestackError::Bridge(_)));
    }

    #[test]
    fn test_terminate_applies_single_exit() {
        let controller = Arc::new(RecordingController::default());
        RecoveryOutcome::Terminate.apply(controller.as_ref());

        assert_eq!(controller.exits.load(Ordering::SeqCst), 1);
        assert_eq!(controller.relaunches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_restart_schedules_relaunch_then_exits() {
        let controller = Arc::new(RecordingController::default());
        RecoveryOutcome::Restart.apply(controller.as_ref());

        assert_eq!(controller.relaunches.load(Ordering::SeqCst), 1);
        assert_eq!(controller.exits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_continue_touches_nothing() {
        let controller = Arc::new(RecordingController::default());
        RecoveryOutcome::Continue.apply(controller.as_ref());

        assert_eq!(controller.relaunches.load(Ordering::SeqCst), 0);
        assert_eq!(controller.exits.load(Ordering::SeqCst), 0);
    }
}
