// ABOUTME: Customer reviews feed library for appreviews.
// ABOUTME: Provides the JSON envelope models, the entry-to-Review parser, and a one-shot fetch.

pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;

pub use error::FeedError;
pub use fetch::fetch_feed;
pub use models::{Entry, FeedEnvelope};
pub use parser::parse_feed_bytes;
