// ABOUTME: Feed decoding: turns the JSON envelope into Review records.
// ABOUTME: One Review per entry, in feed order, with no filtering.

use appreviews_scrape::Review;

use crate::error::FeedError;
use crate::models::{Entry, FeedEnvelope};

/// Parses feed bytes into reviews.
///
/// The number of reviews always equals the number of entries in the feed.
pub fn parse_feed_bytes(data: &[u8]) -> Result<Vec<Review>, FeedError> {
    let envelope: FeedEnvelope = serde_json::from_slice(data).map_err(FeedError::parse)?;
    Ok(envelope
        .feed
        .entry
        .into_vec()
        .into_iter()
        .map(map_entry)
        .collect())
}

fn map_entry(entry: Entry) -> Review {
    Review {
        title: entry.title.label,
        rating: entry.rating.label,
        content: entry.content.label,
        author: entry.author.name.label,
    }
}
