//! Toast notification capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::HostResult;

/// Toast severity variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    /// Informational toast
    #[default]
    Info,
    /// Error toast
    Error,
}

impl ToastVariant {
    /// Get the variant as the host's wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ToastVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A toast notification to be surfaced by the host UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastRequest {
    /// Toast title line.
    pub title: String,
    /// Toast body message.
    pub message: String,
    /// Severity variant.
    #[serde(default)]
    pub variant: ToastVariant,
    /// Display duration in milliseconds.
    pub duration_ms: u64,
}

impl ToastRequest {
    /// Create an informational toast.
    pub fn info(title: impl Into<String>, message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Info,
            duration_ms,
        }
    }

    /// Create an error toast.
    pub fn error(title: impl Into<String>, message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Error,
            duration_ms,
        }
    }
}

/// Asynchronous toast-display capability provided by the host.
///
/// Delivery is transient UI feedback; callers that treat it as
/// fire-and-forget must catch the error themselves.
#[async_trait]
pub trait ToastClient: Send + Sync {
    /// Show a toast in the host UI.
    async fn show_toast(&self, request: ToastRequest) -> HostResult<()>;
}
