/// Path utilities for validation and normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `#`, `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must be lower-case when `fold_case` is set
///
/// # Examples
///
/// ```
/// use adw_router::path::is_canonical_path;
///
/// assert!(is_canonical_path("/", true));
/// assert!(is_canonical_path("/posts/42", true));
///
/// assert!(!is_canonical_path("", true));
/// assert!(!is_canonical_path("#/posts", true));
/// assert!(!is_canonical_path("/Posts", true));
/// assert!(is_canonical_path("/Posts", false));
/// assert!(!is_canonical_path("/posts/", true));
/// ```
pub fn is_canonical_path(path: &str, fold_case: bool) -> bool {
    if !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') || path.contains('#') {
        return false;
    }

    if fold_case && path.chars().any(char::is_uppercase) {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a hash fragment or path to canonical form
///
/// Returns `Cow::Borrowed` when input is already canonical (zero allocations).
/// Returns `Cow::Owned` when normalization is needed.
///
/// # Handles
///
/// - Leading hash: `#/posts` → `/posts`
/// - Case folding: `/Posts/ABC` → `/posts/abc` (when `fold_case`)
/// - Missing slash: `posts` → `/posts`
/// - Trailing slashes: `/posts/` → `/posts`
/// - Double slashes and backslashes: `/a//b\c` → `/a/b/c`
/// - Empty input or bare `#`: → `/`
///
/// # Examples
///
/// ```
/// use adw_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about", true), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("#/Posts/42/", true), "/posts/42");
/// assert_eq!(normalize_path("#", true), "/");
/// assert_eq!(normalize_path("", true), "/");
/// ```
pub fn normalize_path(path: &str, fold_case: bool) -> Cow<'_, str> {
    if is_canonical_path(path, fold_case) {
        return Cow::Borrowed(path);
    }

    let stripped = path.strip_prefix('#').unwrap_or(path);
    let folded = if fold_case {
        stripped.to_lowercase()
    } else {
        stripped.to_string()
    };

    let normalized = folded
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(format!("/{}", normalized))
}
