//! # Service-Layer Availability Check
//!
//! Maps the raw platform probe onto the structured status record the host
//! runtime consumes. The mapping is deterministic: the success code yields
//! `{statusCode, isAvailable: true}` and nothing else; every other code
//! additionally carries whether the failure is user-resolvable and a
//! human-readable error string.

use bridge_traits::availability::{ServiceAvailability, CONNECTION_SUCCESS};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured availability status reported to the host runtime.
///
/// `isUserResolvableError` and `error` are present only when the service
/// layer is unavailable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityStatus {
    pub status_code: i32,
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_user_resolvable_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AvailabilityStatus {
    /// Whether the failure can be fixed through the recovery prompt.
    pub fn is_resolvable(&self) -> bool {
        self.is_user_resolvable_error.unwrap_or(false)
    }
}

/// Query the platform probe and build the status record.
///
/// Pure query, no mutation; callable synchronously (the constants snapshot
/// uses it at module construction) and from the module's async operation.
pub fn check(provider: &dyn ServiceAvailability) -> AvailabilityStatus {
    let status_code = provider.status_code();
    debug!(status_code, "Service availability check");

    if status_code == CONNECTION_SUCCESS {
        AvailabilityStatus {
            status_code,
            is_available: true,
            is_user_resolvable_error: None,
            error: None,
        }
    } else {
        AvailabilityStatus {
            status_code,
            is_available: false,
            is_user_resolvable_error: Some(provider.is_user_resolvable(status_code)),
            error: Some(provider.describe(status_code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAvailability {
        code: i32,
        resolvable: bool,
    }

    impl ServiceAvailability for StubAvailability {
        fn status_code(&self) -> i32 {
            self.code
        }

        fn is_user_resolvable(&self, _code: i32) -> bool {
            self.resolvable
        }

        fn describe(&self, code: i32) -> String {
            format!("service error {}", code)
        }
    }

    #[test]
    fn test_success_code_maps_to_available() {
        let status = check(&StubAvailability {
            code: 0,
            resolvable: false,
        });

        assert_eq!(
            status,
            AvailabilityStatus {
                status_code: 0,
                is_available: true,
                is_user_resolvable_error: None,
                error: None,
            }
        );
    }

    #[test]
    fn test_resolvable_failure_carries_error_fields() {
        let status = check(&StubAvailability {
            code: 2,
            resolvable: true,
        });

        assert!(!status.is_available);
        assert_eq!(status.is_user_resolvable_error, Some(true));
        assert!(status.is_resolvable());
        let error = status.error.unwrap();
        assert!(!error.is_empty());
    }

    #[test]
    fn test_unresolvable_failure() {
        let status = check(&StubAvailability {
            code: 9,
            resolvable: false,
        });

        assert_eq!(status.is_user_resolvable_error, Some(false));
        assert!(!status.is_resolvable());
    }

    #[test]
    fn test_success_serializes_without_error_fields() {
        let status = check(&StubAvailability {
            code: 0,
            resolvable: false,
        });

        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"statusCode":0,"isAvailable":true}"#);
    }

    #[test]
    fn test_failure_serializes_with_error_fields() {
        let status = check(&StubAvailability {
            code: 2,
            resolvable: true,
        });

        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"isUserResolvableError\":true"));
        assert!(json.contains("\"error\":"));
    }
}
