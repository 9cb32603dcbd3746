//! Service-Layer Availability Probing
//!
//! Abstracts the platform component that reports whether the service layer
//! (Play-Services-style) is present and usable.

/// Result code reported when the service layer is present and usable.
///
/// Matches `ConnectionResult.SUCCESS` on Android; other platforms must map
/// their own "all good" signal onto this value.
pub const CONNECTION_SUCCESS: i32 = 0;

/// Service-layer availability probe.
///
/// Mirrors the shape of Android's `GoogleApiAvailability`: a raw integer
/// result code plus helpers to classify and describe non-success codes.
/// Implementations must be cheap and synchronous; the adapter calls
/// [`status_code`](ServiceAvailability::status_code) once at module attach
/// time to freeze the constants snapshot and again on every explicit check.
///
/// # Platform Support
///
/// - **Android**: `GoogleApiAvailability.isGooglePlayServicesAvailable`
/// - **iOS**: always-success stub (no equivalent service layer)
/// - **Desktop**: always-success stub (`bridge-desktop`)
pub trait ServiceAvailability: Send + Sync {
    /// Raw result code from the platform probe.
    ///
    /// [`CONNECTION_SUCCESS`] means available; any other value is a failure
    /// code the remaining methods can classify.
    fn status_code(&self) -> i32;

    /// Whether the platform can fix `code` via a user-facing prompt
    /// (e.g., install or update a component).
    fn is_user_resolvable(&self, code: i32) -> bool;

    /// Human-readable description of a non-success `code`.
    ///
    /// Must return a non-empty string for every code the probe can report.
    fn describe(&self, code: i32) -> String;
}
