//! # Firestack Adapter Core
//!
//! Bridge adapter exposing a mobile push/analytics-style native SDK to a
//! cross-platform host runtime. The adapter translates host configuration
//! calls and lifecycle notifications into native SDK operations, and
//! re-emits native lifecycle and activity-result signals as host-visible
//! events.
//!
//! ## Overview
//!
//! - [`config`] - merge caller-supplied options over platform defaults
//! - [`app`] - write-once gate guarding the process-wide SDK instance
//! - [`availability`] - structured service-layer availability status
//! - [`recovery`] - recovery flow for resolvable service failures,
//!   resolved to a [`RecoveryOutcome`](recovery::RecoveryOutcome)
//! - [`lifecycle`] - foreground/background event forwarding
//! - [`server_value`] - the server-timestamp placeholder descriptor
//! - [`events`] - broadcast bus carrying adapter events to host subscribers
//! - [`module`] - the [`FirestackModule`](module::FirestackModule) facade
//!   the host runtime binds against
//! - [`logging`] - `tracing-subscriber` bootstrap for embedding hosts
//!
//! Platform capabilities (availability probe, recovery prompt, process
//! control, default options, SDK construction) are injected as `Arc<dyn>`
//! handles over the `bridge-traits` seams; `bridge-desktop` ships the
//! desktop implementations.

pub mod app;
pub mod availability;
pub mod config;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod logging;
pub mod module;
pub mod recovery;
pub mod server_value;

pub use error::{FirestackError, Result};

// Re-export commonly used types
pub use app::SdkGate;
pub use availability::AvailabilityStatus;
pub use config::ConfigurationRequest;
pub use events::{BridgeEvent, EventBus, APP_STATE_EVENT};
pub use module::{ConfigureResponse, FirestackModule, ModuleConstants, ModuleDependencies};
pub use recovery::{ActivityResult, RecoveryOutcome, RESTART_DELAY};
pub use server_value::ServerValues;
