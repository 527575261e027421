//! Semantic version comparison.

/// Result of comparing two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    /// Current is older than target
    Older,
    /// Current equals target
    Equal,
    /// Current is newer than target
    Newer,
}

/// Compare two semver version strings.
///
/// Accepts an optional `v` prefix and a `-prerelease` suffix; missing
/// numeric segments read as zero.
pub fn compare_versions(current: &str, target: &str) -> VersionComparison {
    let current = parse_version(current);
    let target = parse_version(target);

    match current.cmp(&target) {
        std::cmp::Ordering::Less => VersionComparison::Older,
        std::cmp::Ordering::Equal => VersionComparison::Equal,
        std::cmp::Ordering::Greater => VersionComparison::Newer,
    }
}

/// Parse a version string into comparable parts.
fn parse_version(version: &str) -> (u32, u32, u32, String) {
    let version = version.strip_prefix('v').unwrap_or(version);

    let (version_part, prerelease) = version
        .split_once('-')
        .map(|(v, p)| (v, p.to_string()))
        .unwrap_or((version, String::new()));

    let parts: Vec<u32> = version_part
        .split('.')
        .take(3)
        .filter_map(|s| s.parse().ok())
        .collect();

    let major = parts.first().copied().unwrap_or(0);
    let minor = parts.get(1).copied().unwrap_or(0);
    let patch = parts.get(2).copied().unwrap_or(0);

    (major, minor, patch, prerelease)
}
