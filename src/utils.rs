//! Common utility functions shared across the codebase.

/// Normalizes path separators to forward slashes.
///
/// Translation directories are matched by a suffix like `translations/en`;
/// normalizing first keeps the match stable across platforms.
///
/// # Examples
///
/// ```
/// use ts2json::utils::normalize_slashes;
///
/// assert_eq!(normalize_slashes("a/b/c"), "a/b/c");
/// assert_eq!(normalize_slashes("a\\b\\c"), "a/b/c");
/// ```
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}
