//! Cross-platform path utilities for Fragmenta
//!
//! Asset references end up in HTML, so they always use forward slashes
//! regardless of the platform the project was compiled on.

use std::path::Path;

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Express `path` relative to `base` with forward slashes
///
/// Falls back to the full path when `path` is not below `base`.
pub fn relative_href(base: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    to_forward_slashes(relative)
        .trim_start_matches("./")
        .to_string()
}
