//! Path expression parsing.
//!
//! Turns a dot/bracket expression such as `a.b[3].c` into the segment
//! sequence the navigator descends through.

use crate::navigator::PathSegment;
use crate::utils::error::PathParseError;

/// Parse a dot/bracket path expression into navigation segments
///
/// **Public** - main entry point for path parsing
///
/// Segments are separated by `.`; a segment ending in `[<integer>]`
/// expands into a key lookup followed by an index lookup, so `b[3]`
/// yields `Key("b")` then `Index(3)`. A trailing `]` without a matching
/// `[` leaves the segment as a literal key.
///
/// # Arguments
/// * `expression` - Path expression, e.g. `a.b[3].c`
///
/// # Returns
/// Segments in descent order, never containing the root marker
///
/// # Errors
/// * `PathParseError::EmptyExpression` - The expression has no content
/// * `PathParseError::EmptySegment` - Two dots touch, or a dot leads or
///   trails the expression
/// * `PathParseError::MissingIndexKey` - A segment indexes without naming
///   a key first, e.g. `[3]`
/// * `PathParseError::InvalidIndex` - The bracket content is not an
///   unsigned integer
///
/// # Example
/// ```ignore
/// use diffnav::parser::parse_path;
///
/// let segments = parse_path("users[0].name")?;
/// assert_eq!(segments.len(), 3);
/// ```
pub fn parse_path(expression: &str) -> Result<Vec<PathSegment>, PathParseError> {
    if expression.is_empty() {
        return Err(PathParseError::EmptyExpression);
    }

    let mut segments = Vec::new();
    for (position, piece) in expression.split('.').enumerate() {
        if piece.is_empty() {
            return Err(PathParseError::EmptySegment(position));
        }

        if piece.ends_with(']') {
            if let Some((base, bracketed)) = piece.rsplit_once('[') {
                if base.is_empty() {
                    return Err(PathParseError::MissingIndexKey(piece.to_string()));
                }
                let digits = &bracketed[..bracketed.len() - 1];
                let index: usize = digits
                    .parse()
                    .map_err(|_| PathParseError::InvalidIndex(piece.to_string()))?;
                segments.push(PathSegment::Key(base.to_string()));
                segments.push(PathSegment::Index(index));
                continue;
            }
        }

        segments.push(PathSegment::Key(piece.to_string()));
    }

    Ok(segments)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys() {
        let segments = parse_path("a.b.c").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::Key("a".to_string()),
                PathSegment::Key("b".to_string()),
                PathSegment::Key("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_indexed_segment_expands_to_key_then_index() {
        let segments = parse_path("a.b[3].c").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::Key("a".to_string()),
                PathSegment::Key("b".to_string()),
                PathSegment::Index(3),
                PathSegment::Key("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_key() {
        let segments = parse_path("alpha").unwrap();
        assert_eq!(segments, vec![PathSegment::Key("alpha".to_string())]);
    }

    #[test]
    fn test_empty_expression_rejected() {
        assert_eq!(parse_path("").unwrap_err(), PathParseError::EmptyExpression);
    }

    #[test]
    fn test_double_dot_rejected() {
        assert_eq!(
            parse_path("a..b").unwrap_err(),
            PathParseError::EmptySegment(1)
        );
    }

    #[test]
    fn test_trailing_dot_rejected() {
        assert_eq!(
            parse_path("a.b.").unwrap_err(),
            PathParseError::EmptySegment(2)
        );
    }

    #[test]
    fn test_bare_index_rejected() {
        assert_eq!(
            parse_path("a.[3]").unwrap_err(),
            PathParseError::MissingIndexKey("[3]".to_string())
        );
    }

    #[test]
    fn test_non_numeric_index_rejected() {
        assert_eq!(
            parse_path("a[first]").unwrap_err(),
            PathParseError::InvalidIndex("a[first]".to_string())
        );
    }

    #[test]
    fn test_negative_index_rejected() {
        assert_eq!(
            parse_path("a[-1]").unwrap_err(),
            PathParseError::InvalidIndex("a[-1]".to_string())
        );
    }

    #[test]
    fn test_unmatched_closing_bracket_is_a_literal_key() {
        let segments = parse_path("odd]").unwrap();
        assert_eq!(segments, vec![PathSegment::Key("odd]".to_string())]);
    }

    #[test]
    fn test_nested_brackets_keep_outer_key_literal() {
        // Only the final bracket pair acts as an index
        let segments = parse_path("a[0][1]").unwrap();
        assert_eq!(
            segments,
            vec![
                PathSegment::Key("a[0]".to_string()),
                PathSegment::Index(1),
            ]
        );
    }
}
