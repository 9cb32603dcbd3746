//! # Module Facade
//!
//! The surface the host runtime binds against. A [`FirestackModule`] is
//! built from injected platform seams; construction freezes the constants
//! snapshot and reads the platform defaults, and every exposed operation
//! maps one of the original bridge methods onto a `Result`-based call.
//!
//! ## Operations
//!
//! - [`play_services_check`](FirestackModule::play_services_check) /
//!   [`play_services_status`](FirestackModule::play_services_status)
//! - [`configure_with_options`](FirestackModule::configure_with_options)
//! - [`server_value`](FirestackModule::server_value)
//! - [`constants`](FirestackModule::constants)
//! - lifecycle notifications (`on_host_resume` / `on_host_pause` /
//!   `on_host_destroy`) and `on_activity_result`
//! - [`attempt_recovery`](FirestackModule::attempt_recovery)
//!
//! Each operation delivers exactly one success or one error; there is no
//! callback to double-invoke or drop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bridge_traits::{
    availability::ServiceAvailability,
    options::{DefaultOptionsSource, SdkFactory, SdkOptions},
    recovery::{ProcessController, RecoveryPrompt},
};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

use crate::app::SdkGate;
use crate::availability::{self, AvailabilityStatus};
use crate::config::{self, ConfigurationRequest};
use crate::error::Result;
use crate::events::EventBus;
use crate::lifecycle::LifecycleForwarder;
use crate::recovery::{self, ActivityResult, RecoveryOutcome};
use crate::server_value::{self, ServerValues};

/// Platform seam handles the module requires.
pub struct ModuleDependencies {
    pub availability: Arc<dyn ServiceAvailability>,
    pub defaults: Arc<dyn DefaultOptionsSource>,
    pub sdk_factory: Arc<dyn SdkFactory>,
    pub recovery_prompt: Arc<dyn RecoveryPrompt>,
    pub process: Arc<dyn ProcessController>,
}

impl ModuleDependencies {
    /// Construct a dependency bundle from explicit bridge handles.
    pub fn new(
        availability: Arc<dyn ServiceAvailability>,
        defaults: Arc<dyn DefaultOptionsSource>,
        sdk_factory: Arc<dyn SdkFactory>,
        recovery_prompt: Arc<dyn RecoveryPrompt>,
        process: Arc<dyn ProcessController>,
    ) -> Self {
        Self {
            availability,
            defaults,
            sdk_factory,
            recovery_prompt,
            process,
        }
    }
}

/// Read-only constants frozen at module attach time.
///
/// Computed once at construction; callers needing a fresh status use
/// [`FirestackModule::play_services_status`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleConstants {
    #[serde(rename = "googleApiAvailability")]
    pub google_api_availability: AvailabilityStatus,
}

/// Success payload of [`FirestackModule::configure_with_options`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigureResponse {
    pub msg: String,
}

impl ConfigureResponse {
    fn success() -> Self {
        Self {
            msg: "success".to_string(),
        }
    }
}

/// The bridge module exposed to the host runtime.
pub struct FirestackModule {
    deps: ModuleDependencies,
    gate: Arc<SdkGate>,
    defaults: SdkOptions,
    constants: ModuleConstants,
    events: EventBus,
    lifecycle: LifecycleForwarder,
    activity_tx: mpsc::UnboundedSender<ActivityResult>,
    activity_rx: Mutex<mpsc::UnboundedReceiver<ActivityResult>>,
    recovery_pending: AtomicBool,
}

impl FirestackModule {
    /// Create a module bound to the process-wide SDK gate.
    pub fn new(deps: ModuleDependencies) -> Self {
        Self::with_gate(deps, SdkGate::global())
    }

    /// Create a module with an explicit gate (tests use fresh gates).
    pub fn with_gate(deps: ModuleDependencies, gate: Arc<SdkGate>) -> Self {
        debug!("New module instance");
        let constants = ModuleConstants {
            google_api_availability: availability::check(deps.availability.as_ref()),
        };
        let defaults = deps.defaults.load();
        let events = EventBus::default();
        let lifecycle = LifecycleForwarder::new(events.clone());
        let (activity_tx, activity_rx) = mpsc::unbounded_channel();

        Self {
            deps,
            gate,
            defaults,
            constants,
            events,
            lifecycle,
            activity_tx,
            activity_rx: Mutex::new(activity_rx),
            recovery_pending: AtomicBool::new(false),
        }
    }

    /// Constants snapshot frozen at construction.
    pub fn constants(&self) -> &ModuleConstants {
        &self.constants
    }

    /// Event bus carrying adapter events to the host runtime.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Fresh availability status (synchronous query).
    pub fn play_services_status(&self) -> AvailabilityStatus {
        availability::check(self.deps.availability.as_ref())
    }

    /// Check whether the service layer is available.
    pub async fn play_services_check(&self) -> Result<bool> {
        let status = self.play_services_status();
        debug!(available = status.is_available, "doPlayServicesCheck");
        Ok(status.is_available)
    }

    /// Configure the SDK from a request merged over platform defaults.
    ///
    /// Idempotent: once an SDK instance exists, later calls succeed without
    /// reading the request. Construction failures surface as
    /// [`FirestackError::Configuration`](crate::FirestackError::Configuration)
    /// with the underlying message; the process keeps running.
    pub async fn configure_with_options(
        &self,
        request: &ConfigurationRequest,
    ) -> Result<ConfigureResponse> {
        info!("configureWithOptions");
        let resolved = config::resolve(request, &self.defaults);
        self.gate
            .initialize_once(self.deps.sdk_factory.as_ref(), &resolved)?;
        Ok(ConfigureResponse::success())
    }

    /// Server-value descriptors (the server-timestamp placeholder).
    pub fn server_value(&self) -> ServerValues {
        server_value::server_values()
    }

    /// Host signaled resume.
    pub fn on_host_resume(&self) {
        self.lifecycle.host_resumed();
    }

    /// Host signaled pause.
    pub fn on_host_pause(&self) {
        self.lifecycle.host_paused();
    }

    /// Host signaled destroy; accepted and ignored.
    pub fn on_host_destroy(&self) {
        self.lifecycle.host_destroyed();
    }

    /// Activity-result notification from the host platform.
    ///
    /// Results are consumed only by a recovery flow already in flight; with
    /// none pending they are dropped, so routine results from unrelated
    /// activities neither accumulate nor resolve a later flow.
    pub fn on_activity_result(&self, request_code: i32, result_code: i32) {
        if !self.recovery_pending.load(Ordering::SeqCst) {
            debug!(request_code, result_code, "No recovery in flight; dropping activity result");
            return;
        }
        debug!(request_code, result_code, "Activity result received");
        self.activity_tx
            .send(ActivityResult {
                request_code,
                result_code,
            })
            .ok();
    }

    /// Run the recovery flow for an unavailable status and apply the
    /// outcome through the process controller.
    ///
    /// With a real controller this returns only for
    /// [`RecoveryOutcome::Continue`]; a restart or termination ends the
    /// process inside `apply`. Test controllers record the calls instead.
    pub async fn attempt_recovery(&self, status: &AvailabilityStatus) -> Result<RecoveryOutcome> {
        let outcome = {
            let mut activity_rx = self.activity_rx.lock().await;
            // Discard anything left over from an earlier flow's teardown.
            while activity_rx.try_recv().is_ok() {}
            self.recovery_pending.store(true, Ordering::SeqCst);
            let flow =
                recovery::run(status, self.deps.recovery_prompt.as_ref(), &mut activity_rx).await;
            self.recovery_pending.store(false, Ordering::SeqCst);
            flow?
        };
        outcome.apply(self.deps.process.as_ref());
        Ok(outcome)
    }
}
