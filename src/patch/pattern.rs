//! Pattern construction for the fuzzy patch tiers.
//!
//! Both fuzzy tiers build a regex over the original (tagged) content from a
//! search text the caller quoted, so every search character must be escaped
//! before it enters the pattern — `$`, `(`, `)`, `.` and friends are common
//! in price and citation text and must match literally. Escaping and joining
//! live here, in one place, so the two tiers cannot drift apart.

use std::ops::Range;

use regex::Regex;

/// Zero or more markup tags.
const TAGS: &str = "(?:<[^>]*>)*";

/// One or more tags or whitespace characters, in any mix.
const TAGS_OR_SPACE: &str = "(?:\\s|<[^>]*>)+";

/// Tier-2 pattern: the search text's characters, verbatim, with tags
/// permitted between any two of them.
pub fn tag_tolerant_pattern(search_text: &str) -> String {
    let mut pattern = String::with_capacity(search_text.len() * 2);
    let mut buf = [0u8; 4];
    for (i, ch) in search_text.chars().enumerate() {
        if i > 0 {
            pattern.push_str(TAGS);
        }
        pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
    }
    pattern
}

/// Tier-3 pattern: the whitespace-normalized search text's words, verbatim,
/// separated by any run of tags and/or whitespace.
pub fn fuzzy_word_pattern(normalized_search: &str) -> String {
    normalized_search
        .split(' ')
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join(TAGS_OR_SPACE)
}

/// Collapse whitespace runs (including newlines) to single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Locate the first match of a built pattern in the original content.
///
/// A pattern that fails to compile (only possible by exceeding regex size
/// limits) is treated as no match.
pub fn find_first(content: &str, pattern: &str) -> Option<Range<usize>> {
    let re = Regex::new(pattern).ok()?;
    re.find(content).map(|m| m.range())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters_escaped() {
        let pattern = tag_tolerant_pattern("$1 (a.b)");
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match("$1 (a.b)"));
        assert!(!re.is_match("$1 (aXb)"));
    }

    #[test]
    fn test_tag_tolerant_matches_through_tags() {
        let pattern = tag_tolerant_pattern("Hello world");
        let re = Regex::new(&pattern).unwrap();
        let m = re.find("<p>Hello <strong>world</strong></p>").unwrap();
        assert_eq!(m.as_str(), "Hello <strong>world");
    }

    #[test]
    fn test_tag_tolerant_does_not_bridge_whitespace() {
        let pattern = tag_tolerant_pattern("Hello world");
        let re = Regex::new(&pattern).unwrap();
        assert!(!re.is_match("Hello   world"));
    }

    #[test]
    fn test_fuzzy_word_pattern_bridges_both() {
        let pattern = fuzzy_word_pattern("Hello world");
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match("Hello   world"));
        assert!(re.is_match("Hello\n<em>world</em>"));
        assert!(!re.is_match("Helloworld"));
    }

    #[test]
    fn test_fuzzy_word_pattern_escapes_words() {
        let pattern = fuzzy_word_pattern("$100 (estimated)");
        let re = Regex::new(&pattern).unwrap();
        assert!(re.is_match("$100  (estimated)"));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  c "), "a b c");
        assert_eq!(normalize_whitespace("\n \t"), "");
    }

    #[test]
    fn test_find_first_returns_first_range() {
        let range = find_first("abcabc", &tag_tolerant_pattern("bc")).unwrap();
        assert_eq!(range, 1..3);
    }
}
