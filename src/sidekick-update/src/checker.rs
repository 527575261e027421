//! Update checker seam and its result type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::UpdateResult;
use crate::version::{compare_versions, VersionComparison};

/// Outcome of consulting the package registry for the installed extension.
///
/// Exactly one of the four outcomes applies: local development build,
/// pinned version, up to date, or update available (`needs_update()`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheckResult {
    /// Installed version; `None` when it could not be determined.
    #[serde(default)]
    pub current_version: Option<String>,

    /// Latest published version; `None` when the registry had no release.
    #[serde(default)]
    pub latest_version: Option<String>,

    /// True for a local development build (never auto-updated).
    #[serde(default)]
    pub is_local_dev: bool,

    /// True when the user pinned the installed version.
    #[serde(default)]
    pub is_pinned: bool,
}

impl UpdateCheckResult {
    /// Result for a local development build.
    pub fn local_dev(version: Option<String>) -> Self {
        Self {
            current_version: version,
            is_local_dev: true,
            ..Default::default()
        }
    }

    /// Result for a pinned installation.
    pub fn pinned(current_version: impl Into<String>) -> Self {
        Self {
            current_version: Some(current_version.into()),
            is_pinned: true,
            ..Default::default()
        }
    }

    /// Result for an installation the registry has a release for.
    pub fn published(
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            current_version: Some(current_version.into()),
            latest_version: Some(latest_version.into()),
            ..Default::default()
        }
    }

    /// True when the installed version is older than the latest release.
    ///
    /// False whenever either side is unknown.
    pub fn needs_update(&self) -> bool {
        match (&self.current_version, &self.latest_version) {
            (Some(current), Some(latest)) => {
                compare_versions(current, latest) == VersionComparison::Older
            }
            _ => false,
        }
    }
}

/// External update-check collaborator.
///
/// The registry protocol and its caching live with the host; this crate
/// only consumes the summarized result.
#[async_trait]
pub trait UpdateChecker: Send + Sync {
    /// Query the registry for the current and latest versions.
    async fn check(&self) -> UpdateResult<UpdateCheckResult>;
}
