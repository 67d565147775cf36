//! Exact-duplicate removal.
use runiq::filters::{DigestFilter, Filter as _};

use super::FilterMut;

/// Detects the first occurrence of each exact text value.
///
/// [FilterMut::detect_mut] returns `true` the first time a text is seen and
/// `false` for every later exact copy, so filtering a collection with it keeps
/// the first occurrence in input order and drops the rest. No fuzzy matching
/// is done: texts differing by a single byte are distinct.
pub struct ExactDedup {
    seen: DigestFilter,
}

impl Default for ExactDedup {
    fn default() -> Self {
        ExactDedup {
            seen: DigestFilter::default(),
        }
    }
}

impl FilterMut<&str> for ExactDedup {
    fn detect_mut(&mut self, text: &str) -> bool {
        self.seen.detect(text.as_bytes())
    }
}
