// ABOUTME: Error types for customer reviews feed operations.
// ABOUTME: Provides FeedError enum with Fetch and Parse variants; every variant is fatal to a run.

use std::fmt;

use appreviews_scrape::ScrapeError;
use thiserror::Error;

/// Errors that can occur while fetching or decoding the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP request failed or returned a non-success status.
    #[error("failed to fetch feed: {0}")]
    Fetch(#[from] ScrapeError),

    /// The body is not a valid feed envelope.
    #[error("failed to parse feed: {0}")]
    Parse(String),
}

impl FeedError {
    /// Creates a Parse error from an underlying decode error.
    pub fn parse(err: impl fmt::Display) -> Self {
        FeedError::Parse(err.to_string())
    }
}
