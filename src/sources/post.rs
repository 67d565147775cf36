//! Post records.
use crate::labels::Category;

/// A raw corpus record.
///
/// `id` is assigned at ingestion time and sticks to the post through
/// filtering, deduplication and sampling, so downstream identity never
/// depends on positions that those stages renumber. `text` is `None` when
/// the source field was missing or not a string; such posts are inadmissible
/// and never reach the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: usize,
    text: Option<String>,
}

impl Post {
    pub fn new(id: usize, text: Option<String>) -> Self {
        Self { id, text }
    }

    /// Get the post's ingestion id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get a reference to the post's text, if it has one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Consume the post, returning its id and text.
    pub fn into_parts(self) -> (usize, Option<String>) {
        (self.id, self.text)
    }
}

/// A post with its single assigned category.
///
/// Every admitted post yields exactly one of these; the text is concrete by
/// construction since textless posts are filtered out beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPost {
    id: usize,
    text: String,
    category: Category,
}

impl ClassifiedPost {
    pub fn new(id: usize, text: String, category: Category) -> Self {
        Self { id, text, category }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
