/// Route module for hash routing
///
/// Contains pure functional components for pattern parsing and matching.

pub mod pattern;

use std::collections::HashMap;

pub use pattern::{classify_segment, parse_pattern, split_segments, Segment};

/// Matches typed pattern segments against raw path segments
///
/// The segment counts must be equal. Literal segments must be equal;
/// a parameter segment binds the path segment and never fails unless the
/// value is empty. Returns on the first literal mismatch.
pub fn match_segments(pattern: &[Segment], path: &[&str]) -> Option<HashMap<String, String>> {
    if pattern.len() != path.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (segment, value) in pattern.iter().zip(path) {
        match segment {
            Segment::Literal(text) => {
                if text != value {
                    return None;
                }
            }
            Segment::Param(name) => {
                if value.is_empty() {
                    return None;
                }
                params.insert(name.clone(), (*value).to_string());
            }
        }
    }
    Some(params)
}
