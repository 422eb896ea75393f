//! Fuzzy patch engine.
//!
//! Applies an AI-suggested textual correction to stored rich-text content.
//! The quoted excerpt rarely matches byte-for-byte — embedded markup and
//! whitespace drift get in the way — so [`apply_patch`] tries three tiers in
//! order, preferring the least fuzzy match that works:
//!
//! 1. exact substring;
//! 2. tag-insensitive (tags permitted between the excerpt's characters);
//! 3. whitespace-normalized (tags or whitespace runs between its words).
//!
//! Only the first occurrence is ever replaced. A miss on all three tiers is
//! a normal caller-visible outcome (`result: None`), not an error: the
//! suggested-fix workflow presents "could not locate this text" to a human
//! reviewer.

mod pattern;

use std::ops::Range;

use log::debug;
use memchr::memmem;

use crate::content::strip_tags;
use pattern::{find_first, fuzzy_word_pattern, normalize_whitespace, tag_tolerant_pattern};

/// Result of a patch attempt.
///
/// `fuzzy_match` is true only for a tier-3 (whitespace-normalized) match;
/// a tag-insensitive match is structural, not textual, fuzziness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct PatchOutcome {
    pub result: Option<String>,
    pub fuzzy_match: bool,
}

impl PatchOutcome {
    fn matched(result: String, fuzzy_match: bool) -> Self {
        Self {
            result: Some(result),
            fuzzy_match,
        }
    }

    fn no_match() -> Self {
        Self {
            result: None,
            fuzzy_match: false,
        }
    }
}

/// Replace the first occurrence of `search_text` in `content`.
///
/// `content` is returned transformed, never mutated in place; the caller
/// owns persistence of the result.
pub fn apply_patch(content: &str, search_text: &str, replacement: &str) -> PatchOutcome {
    if search_text.is_empty() {
        return PatchOutcome::no_match();
    }

    // Tier 1: exact substring.
    if let Some(start) = memmem::find(content.as_bytes(), search_text.as_bytes()) {
        debug!("patch: exact match at byte {start}");
        return PatchOutcome::matched(
            splice(content, start..start + search_text.len(), replacement),
            false,
        );
    }

    let stripped = strip_tags(content);

    // Tier 2: the excerpt exists once markup is ignored; locate it in the
    // original with tags permitted between its characters.
    if stripped.contains(search_text) {
        if let Some(range) = find_first(content, &tag_tolerant_pattern(search_text)) {
            debug!("patch: tag-insensitive match at {}..{}", range.start, range.end);
            return PatchOutcome::matched(splice(content, range, replacement), false);
        }
    }

    // Tier 3: same, after collapsing whitespace drift on both sides.
    let normalized_search = normalize_whitespace(search_text);
    if !normalized_search.is_empty()
        && normalize_whitespace(&stripped).contains(&normalized_search)
    {
        if let Some(range) = find_first(content, &fuzzy_word_pattern(&normalized_search)) {
            debug!("patch: fuzzy match at {}..{}", range.start, range.end);
            return PatchOutcome::matched(splice(content, range, replacement), true);
        }
    }

    debug!("patch: no match for {}-char search text", search_text.len());
    PatchOutcome::no_match()
}

/// Splice by byte range rather than regex substitution, so `$` and friends
/// in the replacement stay literal.
fn splice(content: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..range.start]);
    out.push_str(replacement);
    out.push_str(&content[range.end..]);
    out
}
