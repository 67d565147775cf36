//! Latin-prefix language heuristic.
use super::Filter;

/// Characters other than letters, digits and whitespace that are still
/// admissible in the inspected prefix.
const PERMITTED_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '-'];

/// Admits text whose leading characters all come from a small Latin repertoire
/// (ASCII letters, digits, whitespace and [PERMITTED_PUNCT]).
///
/// Only the first [LatinPrefix::prefix_len] characters are inspected; content
/// past the prefix never affects the verdict. This is a cheap pre-filter, not
/// a language identifier: Latin-only text in another language passes, and
/// English text with an emoji or an accented letter inside the prefix is
/// rejected. Empty text is rejected.
pub struct LatinPrefix {
    prefix_len: usize,
}

impl LatinPrefix {
    /// specify a prefix length
    pub fn with_prefix_len(prefix_len: usize) -> Self {
        Self { prefix_len }
    }

    /// Get a reference to the filter's prefix length.
    pub fn prefix_len(&self) -> &usize {
        &self.prefix_len
    }
}

impl Default for LatinPrefix {
    /// Default inspected prefix is 100 Unicode codepoints.
    fn default() -> Self {
        LatinPrefix { prefix_len: 100 }
    }
}

impl Filter<&str> for LatinPrefix {
    fn detect(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        text.chars().take(self.prefix_len).all(|c| {
            c.is_ascii_alphanumeric() || c.is_whitespace() || PERMITTED_PUNCT.contains(&c)
        })
    }
}
