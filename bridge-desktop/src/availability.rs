//! Service-Layer Availability Implementation

use bridge_traits::availability::{ServiceAvailability, CONNECTION_SUCCESS};

/// Desktop availability probe (always-available implementation).
///
/// Desktop platforms have no Play-Services-like component to verify, so the
/// probe reports success unconditionally, the same way the desktop lifecycle
/// is treated as permanently foreground elsewhere in the stack.
pub struct DesktopAvailability;

impl DesktopAvailability {
    /// Create a new availability probe.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DesktopAvailability {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceAvailability for DesktopAvailability {
    fn status_code(&self) -> i32 {
        CONNECTION_SUCCESS
    }

    fn is_user_resolvable(&self, _code: i32) -> bool {
        false
    }

    fn describe(&self, code: i32) -> String {
        format!("Unknown service status code: {}", code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_always_available() {
        let probe = DesktopAvailability::new();
        assert_eq!(probe.status_code(), CONNECTION_SUCCESS);
        assert!(!probe.is_user_resolvable(2));
    }

    #[test]
    fn test_describe_is_non_empty() {
        let probe = DesktopAvailability::new();
        assert!(!probe.describe(9).is_empty());
    }
}
