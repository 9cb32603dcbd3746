//! SDK Factory and Recovery Prompt Implementations

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    options::{SdkApp, SdkFactory, SdkOptions},
    recovery::RecoveryPrompt,
};
use tracing::{debug, info};

/// Desktop SDK factory.
///
/// Enforces the same required fields the native SDK rejects at construction
/// time: an application id and an API key must both be present and
/// non-empty. All other options are optional pass-through.
pub struct DesktopSdkFactory;

impl DesktopSdkFactory {
    pub fn new() -> Self {
        Self
    }

    fn require<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
        match value {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(BridgeError::InvalidOptions(format!(
                "Missing required option: {}",
                field
            ))),
        }
    }
}

impl Default for DesktopSdkFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SdkFactory for DesktopSdkFactory {
    fn initialize_app(&self, options: &SdkOptions) -> Result<SdkApp> {
        let application_id = Self::require("applicationId", options.application_id.as_deref())?;
        Self::require("apiKey", options.api_key.as_deref())?;

        info!(application_id, "Initializing SDK instance");
        Ok(SdkApp::new(options.clone()))
    }
}

/// Desktop recovery prompt (unavailable implementation).
///
/// Desktop has no modal recovery UI; the availability probe never reports a
/// resolvable failure here, so this prompt exists only to satisfy the seam.
pub struct DesktopRecoveryPrompt;

impl DesktopRecoveryPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopRecoveryPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecoveryPrompt for DesktopRecoveryPrompt {
    async fn present(&self, status_code: i32, message: &str) -> Result<()> {
        debug!(status_code, message, "Recovery prompt requested on desktop");
        Err(BridgeError::NotAvailable(
            "No recovery prompt UI on desktop".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_requires_application_id() {
        let factory = DesktopSdkFactory::new();
        let options = SdkOptions {
            api_key: Some("key".to_string()),
            ..Default::default()
        };

        let err = factory.initialize_app(&options).unwrap_err();
        assert!(err.to_string().contains("applicationId"));
    }

    #[test]
    fn test_factory_rejects_empty_api_key() {
        let factory = DesktopSdkFactory::new();
        let options = SdkOptions {
            application_id: Some("app-1".to_string()),
            api_key: Some(String::new()),
            ..Default::default()
        };

        let err = factory.initialize_app(&options).unwrap_err();
        assert!(err.to_string().contains("apiKey"));
    }

    #[test]
    fn test_factory_constructs_app() {
        let factory = DesktopSdkFactory::new();
        let options = SdkOptions {
            application_id: Some("app-1".to_string()),
            api_key: Some("key".to_string()),
            storage_bucket: Some("bucket".to_string()),
            ..Default::default()
        };

        let app = factory.initialize_app(&options).unwrap();
        assert_eq!(app.options(), &options);
    }

    #[tokio::test]
    async fn test_recovery_prompt_not_available() {
        let prompt = DesktopRecoveryPrompt::new();
        let err = prompt.present(2, "update required").await.unwrap_err();
        assert!(matches!(err, BridgeError::NotAvailable(_)));
    }
}
