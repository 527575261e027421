//! Error types for host capability calls.

use thiserror::Error;

/// Result type for host capability calls.
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Errors a host capability call can report back to an extension.
#[derive(Debug, Error)]
pub enum HostError {
    /// Toast delivery failed.
    #[error("Toast delivery failed: {message}")]
    ToastFailed { message: String },

    /// A host capability call failed.
    #[error("Host call failed: {message}")]
    CallFailed { message: String },

    /// Event payload could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HostError {
    /// Create a toast delivery failure.
    pub fn toast_failed(message: impl Into<String>) -> Self {
        Self::ToastFailed {
            message: message.into(),
        }
    }

    /// Create a generic capability call failure.
    pub fn call_failed(message: impl Into<String>) -> Self {
        Self::CallFailed {
            message: message.into(),
        }
    }
}
