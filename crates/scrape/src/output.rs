// ABOUTME: Serializer writing an ordered list of reviews as indented JSON.
// ABOUTME: Encodes the whole document before touching the filesystem.

use std::fs;
use std::path::Path;

use crate::error::OutputError;
use crate::review::Review;

/// Default output file for the HTML scraping path.
pub const SCRAPE_OUTPUT_FILE: &str = "reviews.json";

/// Default output file for the feed path.
pub const FEED_OUTPUT_FILE: &str = "reviews_rss.json";

/// Encode reviews as 2-space-indented JSON followed by a newline.
///
/// An empty slice encodes as `[]`.
pub fn to_json(reviews: &[Review]) -> Result<String, OutputError> {
    let mut out = serde_json::to_string_pretty(reviews)?;
    out.push('\n');
    Ok(out)
}

/// Write reviews to `path`, replacing any existing file.
pub fn write_reviews(path: impl AsRef<Path>, reviews: &[Review]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let encoded = to_json(reviews)?;
    fs::write(path, encoded).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = reviews.len(), "Wrote reviews");
    Ok(())
}
