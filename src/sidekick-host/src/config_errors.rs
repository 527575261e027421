//! Accumulator for configuration load errors.
//!
//! The host records config-file failures as it starts up; extensions drain
//! the accumulator later to surface them to the user. The store is owned by
//! whoever constructs the plugin context and lives for one process run.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One failed configuration load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLoadError {
    /// Path of the config file that failed to load.
    pub path: PathBuf,
    /// Failure message.
    pub error: String,
}

impl ConfigLoadError {
    /// Create a new config load error.
    pub fn new(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Process-lifetime accumulator of configuration load errors.
pub trait ConfigErrorStore: Send + Sync {
    /// Record a failed configuration load.
    fn record(&self, error: ConfigLoadError);

    /// Get all accumulated errors, in recording order.
    fn all(&self) -> Vec<ConfigLoadError>;

    /// Clear the accumulator.
    fn clear(&self);
}

/// In-memory [`ConfigErrorStore`].
#[derive(Debug, Default)]
pub struct ConfigErrorBuffer {
    errors: Mutex<Vec<ConfigLoadError>>,
}

impl ConfigErrorBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigErrorStore for ConfigErrorBuffer {
    fn record(&self, error: ConfigLoadError) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error);
        }
    }

    fn all(&self) -> Vec<ConfigLoadError> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }

    fn clear(&self) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.clear();
        }
    }
}
