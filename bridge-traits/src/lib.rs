//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the Firestack adapter core and
//! platform-specific implementations. Each trait represents a capability the
//! adapter consumes but that must be provided differently per platform
//! (Android, iOS, desktop):
//!
//! - [`ServiceAvailability`](availability::ServiceAvailability) - Probe the
//!   platform service layer (Play-Services-style) and describe failures
//! - [`DefaultOptionsSource`](options::DefaultOptionsSource) - Resource-provided
//!   default SDK options
//! - [`SdkFactory`](options::SdkFactory) - One-shot native SDK construction
//! - [`RecoveryPrompt`](recovery::RecoveryPrompt) - Modal recovery UI for
//!   user-resolvable service-layer failures
//! - [`ProcessController`](recovery::ProcessController) - Relaunch scheduling
//!   and process termination
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should convert platform-specific errors to `BridgeError`
//! and provide actionable messages; the adapter core surfaces them unchanged
//! to the host runtime.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so handles can be shared across
//! async tasks. The adapter itself only mutates state on the host runtime's
//! module-call thread, but implementations must not rely on that.

pub mod availability;
pub mod error;
pub mod options;
pub mod recovery;

pub use error::BridgeError;

// Re-export commonly used types
pub use availability::{ServiceAvailability, CONNECTION_SUCCESS};
pub use options::{DefaultOptionsSource, SdkApp, SdkFactory, SdkOptions};
pub use recovery::{ProcessController, RecoveryPrompt, RESOLUTION_REQUEST_CODE};
