/// Pattern parsing for route segments
///
/// Pure functional parsing of hash route patterns into typed segments.
/// All functions are **pure**: same input → same output, no side effects.

/// A single segment of a route pattern
///
/// # Examples
///
/// ```
/// use adw_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("posts"), Segment::Literal("posts".to_string()));
/// assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that must equal the path segment
    Literal(String),
    /// `:name` marker, binds the path segment under `name`
    Param(String),
}

impl Segment {
    /// Returns true for `:name` segments
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// Classifies a single pattern segment (pure function)
///
/// A segment starting with `:` is a parameter marker; anything else,
/// including the empty root segment, is literal.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
        _ => Segment::Literal(segment.to_string()),
    }
}

/// Splits a normalized path or pattern into its raw segments
///
/// The leading `/` is dropped, so `/posts/42` yields `["posts", "42"]`
/// and the root `/` yields a single empty segment.
///
/// # Examples
///
/// ```
/// use adw_router::route::pattern::split_segments;
///
/// assert_eq!(split_segments("/posts/42"), vec!["posts", "42"]);
/// assert_eq!(split_segments("/"), vec![""]);
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

/// Parses a normalized pattern into typed segments (pure function)
///
/// When `fold_case` is set, literal segments are lower-cased so they compare
/// against case-folded paths. Parameter names keep their spelling.
pub fn parse_pattern(pattern: &str, fold_case: bool) -> Vec<Segment> {
    split_segments(pattern)
        .into_iter()
        .map(|raw| match classify_segment(raw) {
            Segment::Literal(text) if fold_case => Segment::Literal(text.to_lowercase()),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify_segment("about"), Segment::Literal("about".to_string()));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":id"), Segment::Param("id".to_string()));
    }

    #[test]
    fn test_bare_colon_is_literal() {
        assert_eq!(classify_segment(":"), Segment::Literal(":".to_string()));
    }

    #[test]
    fn test_parse_pattern_folds_literals_only() {
        let segments = parse_pattern("/Profile/:userId", true);
        assert_eq!(
            segments,
            vec![
                Segment::Literal("profile".to_string()),
                Segment::Param("userId".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_pattern_keeps_case_when_sensitive() {
        let segments = parse_pattern("/Profile", false);
        assert_eq!(segments, vec![Segment::Literal("Profile".to_string())]);
    }

    #[test]
    fn test_split_root() {
        assert_eq!(split_segments("/"), vec![""]);
    }
}
