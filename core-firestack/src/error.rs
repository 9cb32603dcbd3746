use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirestackError {
    /// The native SDK rejected the resolved configuration. The message is
    /// the underlying construction failure, surfaced verbatim to the host.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FirestackError>;
