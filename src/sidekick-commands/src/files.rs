//! Directory-entry filtering.

use std::fs::FileType;

/// Extension recognized for command files (case-sensitive).
const MARKDOWN_EXT: &str = ".md";

/// True only for a regular file whose name ends in `.md`.
///
/// Operates on the descriptor the directory listing already produced;
/// performs no filesystem I/O of its own. Directories and symlinks are
/// excluded even when their names carry the extension.
pub fn is_markdown_file(name: &str, file_type: FileType) -> bool {
    file_type.is_file() && name.ends_with(MARKDOWN_EXT)
}
