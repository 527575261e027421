//! Auto-update notifier hook for the Sidekick host extensions.
//!
//! Reacts to the host's `session.created` lifecycle event (once per
//! process, root sessions only) by consulting an external update checker
//! and surfacing the outcome as UI toasts:
//!
//! - local development build: startup toast with the dev version
//! - version pinned: startup toast with the pinned version
//! - already up to date: startup toast with the current version
//! - update available: invalidate the cached package metadata, then a toast
//!   naming the new version
//!
//! Accumulated configuration-load errors are surfaced afterwards as a
//! separate error toast. Nothing in this crate ever propagates a failure to
//! the host; toast delivery is fire-and-forget.
//!
//! The update-check HTTP client and the on-disk version cache are host
//! collaborators behind the [`UpdateChecker`] and [`VersionCache`] seams.

mod cache;
mod checker;
mod error;
mod notifier;
mod version;

pub use cache::VersionCache;
pub use checker::{UpdateCheckResult, UpdateChecker};
pub use error::{UpdateError, UpdateResult};
pub use notifier::{NotifierOptions, UpdateNotifier};
pub use version::{compare_versions, VersionComparison};

/// Package name under which the host caches this extension's metadata.
pub const PACKAGE_NAME: &str = "sidekick";
