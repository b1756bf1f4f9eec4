// ABOUTME: The normalized Review record shared by the HTML and feed extractors.
// ABOUTME: Serializes to the {title, rating, content, author} output schema.

use serde::{Deserialize, Serialize};

/// A single customer review.
///
/// Reviews carry no identity, so two extractions of the same page produce
/// independent records with no duplicate detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    /// Store-provided label, e.g. "5 out of 5" from the page or "5" from the feed.
    pub rating: String,
    pub content: String,
    pub author: String,
}

impl Review {
    pub fn new(
        title: impl Into<String>,
        rating: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating: rating.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
