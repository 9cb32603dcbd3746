//! # Server Timestamp Descriptor
//!
//! Fixed opaque placeholder the backing SDK's write protocol replaces with
//! the server's authoritative time at write-commit. The adapter exposes the
//! token byte-for-byte and never interprets, computes, or localizes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel key recognized by the backing data-write protocol.
pub const SERVER_TIMESTAMP_KEY: &str = ".sv";

/// Sentinel value naming the substitution the server performs.
pub const SERVER_TIMESTAMP_VALUE: &str = "timestamp";

/// Server-value descriptors exposed to the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerValues {
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: BTreeMap<String, String>,
}

/// The server-timestamp placeholder descriptor.
pub fn server_timestamp() -> BTreeMap<String, String> {
    let mut descriptor = BTreeMap::new();
    descriptor.insert(
        SERVER_TIMESTAMP_KEY.to_string(),
        SERVER_TIMESTAMP_VALUE.to_string(),
    );
    descriptor
}

/// All server-value descriptors.
pub fn server_values() -> ServerValues {
    ServerValues {
        timestamp: server_timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_wire_format() {
        let json = serde_json::to_string(&server_values()).unwrap();
        assert_eq!(json, r#"{"TIMESTAMP":{".sv":"timestamp"}}"#);
    }

    #[test]
    fn test_descriptor_is_stable() {
        assert_eq!(server_timestamp(), server_timestamp());
        assert_eq!(
            server_timestamp().get(SERVER_TIMESTAMP_KEY).map(String::as_str),
            Some(SERVER_TIMESTAMP_VALUE)
        );
    }
}
