//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides desktop-appropriate implementations of the platform
//! seams the Firestack adapter consumes:
//! - `ServiceAvailability` reporting always-available (desktop has no
//!   Play-Services-like layer to probe)
//! - `DefaultOptionsSource` backed by a JSON resource file or environment
//!   variables
//! - `SdkFactory` validating and constructing the SDK handle
//! - `RecoveryPrompt` as unavailable (no modal recovery UI on desktop)
//! - `ProcessController` using `std::process`
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopAvailability, FileDefaultOptionsSource};
//! use std::sync::Arc;
//!
//! let availability = Arc::new(DesktopAvailability::new());
//! let defaults = Arc::new(FileDefaultOptionsSource::new("firestack.json"));
//! // Hand to the module dependencies
//! ```

mod availability;
mod options;
mod process;
mod sdk;

pub use availability::DesktopAvailability;
pub use options::{EnvDefaultOptionsSource, FileDefaultOptionsSource, ENV_PREFIX};
pub use process::DesktopProcessController;
pub use sdk::{DesktopRecoveryPrompt, DesktopSdkFactory};
