//! # SDK Initialization Gate
//!
//! Write-once holder for the process-wide SDK instance. The native SDK may
//! be constructed at most once per process; later initialization requests
//! are accepted as successful no-ops and never replace or reconfigure the
//! existing instance (first-write-wins).

use std::sync::{Arc, OnceLock};

use bridge_traits::options::{SdkApp, SdkFactory, SdkOptions};
use tracing::{debug, info};

use crate::error::{FirestackError, Result};

/// Write-once gate guarding an [`SdkApp`] singleton.
///
/// Hosts use the process-wide gate from [`SdkGate::global`]; tests construct
/// fresh gates. The contract assumes initialization happens on the host
/// runtime's module-call thread, but the holder is race-safe regardless.
#[derive(Debug, Default)]
pub struct SdkGate {
    cell: OnceLock<SdkApp>,
}

impl SdkGate {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The process-wide gate shared by every module instance.
    pub fn global() -> Arc<SdkGate> {
        static GLOBAL: OnceLock<Arc<SdkGate>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(SdkGate::new())))
    }

    /// Initialize the SDK instance if it does not exist yet.
    ///
    /// If an instance already exists, returns it immediately without reading
    /// `options` or invoking the factory. A construction failure leaves the
    /// gate empty, so a later call with corrected options can succeed.
    pub fn initialize_once(
        &self,
        factory: &dyn SdkFactory,
        options: &SdkOptions,
    ) -> Result<&SdkApp> {
        if let Some(app) = self.cell.get() {
            debug!("SDK instance already configured; ignoring options");
            return Ok(app);
        }

        let app = factory
            .initialize_app(options)
            .map_err(|err| FirestackError::Configuration(err.to_string()))?;
        info!("SDK instance configured");

        // A concurrent writer may have won the race; its instance stands.
        Ok(self.cell.get_or_init(|| app))
    }

    /// The current SDK instance, if one has been initialized.
    pub fn current(&self) -> Option<&SdkApp> {
        self.cell.get()
    }

    /// Whether an instance exists.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
