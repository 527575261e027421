//! Error types for update checking.

use thiserror::Error;

/// Result type for update operations.
pub type UpdateResult<T> = std::result::Result<T, UpdateError>;

/// Errors an update check can report.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to connect to update server: {message}")]
    ConnectionFailed { message: String },

    #[error("Update server returned error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid version format: {version}")]
    InvalidVersion { version: String },

    #[error("Failed to read version cache: {message}")]
    CacheError { message: String },
}

impl UpdateError {
    /// Check if this error is retriable.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::ConnectionFailed { .. } => true,
            Self::ServerError { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
