//! Default SDK Options Sources
//!
//! Desktop analogs of the Android resource-provided defaults: a JSON
//! resource file (the `google-services.json` counterpart) and environment
//! variables.

use std::path::{Path, PathBuf};

use bridge_traits::options::{DefaultOptionsSource, SdkOptions};
use tracing::{debug, warn};

/// Environment variable prefix used by [`EnvDefaultOptionsSource`].
pub const ENV_PREFIX: &str = "FIRESTACK_";

/// Default options read from a JSON resource file.
///
/// The file holds an [`SdkOptions`] record in camelCase, e.g.
/// `{"applicationId": "...", "apiKey": "..."}`. A missing or unparsable file
/// yields empty defaults rather than an error - running without platform
/// defaults is a supported configuration.
pub struct FileDefaultOptionsSource {
    path: PathBuf,
}

impl FileDefaultOptionsSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DefaultOptionsSource for FileDefaultOptionsSource {
    fn load(&self) -> SdkOptions {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "No default options resource");
                return SdkOptions::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(options) => {
                debug!(path = %self.path.display(), "Loaded default options resource");
                options
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Ignoring malformed default options resource");
                SdkOptions::default()
            }
        }
    }
}

/// Default options read from `FIRESTACK_*` environment variables.
///
/// Recognized variables: `FIRESTACK_APPLICATION_ID`, `FIRESTACK_API_KEY`,
/// `FIRESTACK_GCM_SENDER_ID`, `FIRESTACK_STORAGE_BUCKET`,
/// `FIRESTACK_DATABASE_URL`. Unset variables leave the field absent.
pub struct EnvDefaultOptionsSource;

impl EnvDefaultOptionsSource {
    pub fn new() -> Self {
        Self
    }

    fn var(suffix: &str) -> Option<String> {
        std::env::var(format!("{}{}", ENV_PREFIX, suffix)).ok()
    }
}

impl Default for EnvDefaultOptionsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultOptionsSource for EnvDefaultOptionsSource {
    fn load(&self) -> SdkOptions {
        SdkOptions {
            application_id: Self::var("APPLICATION_ID"),
            api_key: Self::var("API_KEY"),
            gcm_sender_id: Self::var("GCM_SENDER_ID"),
            storage_bucket: Self::var("STORAGE_BUCKET"),
            database_url: Self::var("DATABASE_URL"),
        }
    }
}
