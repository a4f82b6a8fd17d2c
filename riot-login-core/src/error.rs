//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The host bridge is not attached to this client
    #[error("Host bridge API not available")]
    BridgeUnavailable,

    /// The host bridge raised an error while handling a call
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// network error
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out inside the transport
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status without a decodable result body
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("{0}")]
    Validation(String),

    /// The transport or host does not offer this operation
    #[error("Not supported: {0}")]
    Unsupported(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing capability, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::Unsupported(_)
            | Self::BridgeUnavailable => true,
            Self::Bridge(_)
            | Self::Network(_)
            | Self::Timeout(_)
            | Self::Http { .. }
            | Self::Parse(_)
            | Self::Storage(_)
            | Self::Serialization(_) => false,
        }
    }

    /// Whether the error came from the transport rather than from the backend's answer.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::BridgeUnavailable
                | Self::Bridge(_)
                | Self::Network(_)
                | Self::Timeout(_)
                | Self::Http { .. }
                | Self::Parse(_)
        )
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
