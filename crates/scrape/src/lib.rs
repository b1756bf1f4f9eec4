// ABOUTME: Library entry point for store review scraping and the shared review output.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Review, AppTarget, errors and the serializer.

//! appreviews-scrape - collects customer reviews from an app store page.
//!
//! This crate also owns the pieces shared with the feed extractor: the
//! [`Review`] record, the JSON serializer, the [`AppTarget`] URL builder and the
//! HTTP fetch layer.
//!
//! # Example
//!
//! ```no_run
//! use appreviews_scrape::{output, AppTarget, Client};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().build()?;
//!     let reviews = client.collect(&AppTarget::default().reviews_page_url());
//!     output::write_reviews(output::SCRAPE_OUTPUT_FILE, &reviews)?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extractors;
pub mod options;
pub mod output;
pub mod resource;
pub mod review;
pub mod target;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, OutputError, ScrapeError};
pub use crate::extractors::{extract_reviews, ReviewSelectorSpec, ReviewSelectors};
pub use crate::options::{ClientBuilder, Options};
pub use crate::review::Review;
pub use crate::target::AppTarget;
