// ABOUTME: Single-request retrieval of the customer reviews feed.
// ABOUTME: Reuses the scrape crate's HTTP layer; any failure is returned to the caller as fatal.

use appreviews_scrape::resource::{build_http_client, fetch, FetchOptions};
use appreviews_scrape::{Options, Review};

use crate::error::FeedError;
use crate::parser::parse_feed_bytes;

/// GET `url` once and decode it into reviews.
///
/// `opts.allowed_domains` applies here too; pass [`Options::unrestricted`] to
/// fetch from any host.
pub fn fetch_feed(opts: &Options, url: &str) -> Result<Vec<Review>, FeedError> {
    let client = match opts.http_client.clone() {
        Some(client) => client,
        None => build_http_client(opts)?,
    };

    let fetched = fetch(&client, url, &FetchOptions::from(opts))?;
    let reviews = parse_feed_bytes(&fetched.body)?;
    tracing::info!(url, count = reviews.len(), "Decoded reviews from feed");
    Ok(reviews)
}
