//! Version cache seam.

/// Handle to the host's on-disk package-metadata cache.
///
/// The notifier only ever invalidates an entry (so the next install picks
/// up fresh metadata); storage layout and eviction are the host's concern.
pub trait VersionCache: Send + Sync {
    /// Drop the cached metadata entry for a package.
    fn invalidate(&self, package: &str);
}
