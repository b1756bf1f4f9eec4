// ABOUTME: Extractors module for turning store pages into review records.
// ABOUTME: Contains selector helpers and the review card extractor.

pub mod review;
pub mod select;

pub use review::{extract_reviews, ReviewSelectorSpec, ReviewSelectors};
