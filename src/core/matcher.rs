//! Line matching primitives
//!
//! Literal substring matching only; the pattern never carries regex meaning.

/// Lowercase a string byte-wise over the ASCII range.
///
/// Locale-independent: non-ASCII bytes pass through unchanged.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// Test whether a line contains the pattern as a contiguous substring.
///
/// An empty pattern matches every line. When case_insensitive is set, both
/// sides are normalized with [`to_lower`] before the same substring test.
pub fn line_matches(line: &str, pattern: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        return to_lower(line).contains(&to_lower(pattern));
    }
    line.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lower_ascii() {
        assert_eq!(to_lower("Hello World"), "hello world");
        assert_eq!(to_lower("ABC123"), "abc123");
    }

    #[test]
    fn test_to_lower_non_ascii_passthrough() {
        // Only ASCII letters are folded; multibyte characters are untouched
        assert_eq!(to_lower("Grüß"), "grüß");
        assert_eq!(to_lower("你好ABC"), "你好abc");
    }

    #[test]
    fn test_match_case_sensitive() {
        assert!(line_matches("hello world", "world", false));
        assert!(!line_matches("hello world", "World", false));
        assert!(!line_matches("hello", "hello world", false));
    }

    #[test]
    fn test_match_case_insensitive() {
        assert!(line_matches("Hello World", "world", true));
        assert!(line_matches("hello world", "WORLD", true));
        assert!(!line_matches("hello world", "mars", true));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        assert!(line_matches("anything", "", false));
        assert!(line_matches("", "", false));
        assert!(line_matches("anything", "", true));
    }

    #[test]
    fn test_case_insensitive_invariant_under_case_permutation() {
        let lines = ["FooBar", "foobar", "FOOBAR"];
        for line in lines {
            assert_eq!(
                line_matches(line, "oOb", true),
                line_matches(&to_lower(line), &to_lower("oOb"), true)
            );
        }
    }

    #[test]
    fn test_substring_is_byte_exact_when_sensitive() {
        assert!(line_matches("abcdef", "cde", false));
        assert!(!line_matches("abcdef", "cdE", false));
    }
}
