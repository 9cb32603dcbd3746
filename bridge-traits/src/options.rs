//! SDK Options and Native SDK Construction
//!
//! Shared option records plus the two seams that touch the native SDK:
//! resource-provided defaults and one-shot app construction.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// SDK option record.
///
/// Used both for platform-provided defaults and for the resolved
/// configuration handed to [`SdkFactory::initialize_app`]. Every field is
/// optional; a field left `None` is simply not set on the native SDK
/// instance. Values are passed through without shape validation - malformed
/// values surface only as construction failures downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcm_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

/// Source of platform-default SDK options.
///
/// On Android the defaults come from the build-time resource file
/// (`google-services.json` values compiled into resources); desktop reads a
/// JSON file or environment variables. Read once at module construction.
pub trait DefaultOptionsSource: Send + Sync {
    /// Load the platform defaults. Missing resources yield an empty record,
    /// not an error - absent defaults are a normal configuration.
    fn load(&self) -> SdkOptions;
}

/// Handle to an initialized native SDK instance.
///
/// Opaque to the adapter: it only proves construction succeeded and records
/// the options the instance was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkApp {
    options: SdkOptions,
}

impl SdkApp {
    pub fn new(options: SdkOptions) -> Self {
        Self { options }
    }

    /// Options the instance was constructed from.
    pub fn options(&self) -> &SdkOptions {
        &self.options
    }
}

/// One-shot native SDK constructor.
///
/// The adapter guarantees at most one successful call per process; a failed
/// call may be retried with different options. Implementations must not
/// create a partially-initialized instance on failure.
pub trait SdkFactory: Send + Sync {
    /// Construct the native SDK instance from `options`.
    ///
    /// Rejects option sets the native SDK cannot accept (missing required
    /// field, malformed value) with an error whose message is surfaced
    /// verbatim to the host runtime.
    fn initialize_app(&self, options: &SdkOptions) -> Result<SdkApp>;
}
