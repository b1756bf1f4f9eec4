// ABOUTME: Maps review cards on a store page to Review records via fixed sub-selectors.
// ABOUTME: Selector strings are configurable and compiled once per client.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::extractors::select::{child_attr, child_text, compile};
use crate::review::Review;

/// CSS selectors locating a review card and its fields.
///
/// Field selectors are evaluated relative to each matched card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSelectorSpec {
    pub review: String,
    pub title: String,
    pub rating: String,
    /// Attribute of the rating element holding its label.
    pub rating_attr: String,
    pub content: String,
    pub author: String,
}

impl Default for ReviewSelectorSpec {
    fn default() -> Self {
        Self {
            review: ".we-customer-review".to_string(),
            title: ".we-customer-review__title".to_string(),
            rating: ".we-star-rating".to_string(),
            rating_attr: "aria-label".to_string(),
            content: ".we-customer-review__body .we-truncate__text".to_string(),
            author: ".we-customer-review__user".to_string(),
        }
    }
}

/// Compiled form of [`ReviewSelectorSpec`].
#[derive(Debug, Clone)]
pub struct ReviewSelectors {
    review: Selector,
    title: Selector,
    rating: Selector,
    rating_attr: String,
    content: Selector,
    author: Selector,
}

impl ReviewSelectors {
    pub fn compile(spec: &ReviewSelectorSpec) -> Result<Self, ScrapeError> {
        Ok(Self {
            review: compile(&spec.review)?,
            title: compile(&spec.title)?,
            rating: compile(&spec.rating)?,
            rating_attr: spec.rating_attr.clone(),
            content: compile(&spec.content)?,
            author: compile(&spec.author)?,
        })
    }
}

/// Extract every review card in document order.
///
/// A page with no matching cards yields an empty list.
pub fn extract_reviews(doc: &Html, selectors: &ReviewSelectors) -> Vec<Review> {
    doc.select(&selectors.review)
        .map(|card| Review {
            title: child_text(&card, &selectors.title),
            rating: child_attr(&card, &selectors.rating, &selectors.rating_attr),
            content: child_text(&card, &selectors.content),
            author: child_text(&card, &selectors.author),
        })
        .collect()
}
