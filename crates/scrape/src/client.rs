// ABOUTME: The Client struct that fetches a store reviews page and extracts its review cards.
// ABOUTME: Provides a strict scrape(), an offline scrape_html(), and a lenient collect() for whole runs.

use scraper::Html;

use crate::error::ScrapeError;
use crate::extractors::review::{extract_reviews, ReviewSelectors};
use crate::options::{ClientBuilder, Options};
use crate::resource::{build_http_client, fetch, FetchOptions};
use crate::review::Review;

/// Scrapes reviews from a single store page. No pagination is attempted.
pub struct Client {
    opts: Options,
    http_client: reqwest::blocking::Client,
    selectors: ReviewSelectors,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Result<Self, ScrapeError> {
        let http_client = match opts.http_client.clone() {
            Some(client) => client,
            None => build_http_client(&opts)?,
        };
        let selectors = ReviewSelectors::compile(&opts.selectors)?;

        Ok(Self {
            opts,
            http_client,
            selectors,
        })
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Fetch `url` and extract its reviews.
    pub fn scrape(&self, url: &str) -> Result<Vec<Review>, ScrapeError> {
        let fetch_opts = FetchOptions::from(&self.opts);
        let fetched = fetch(&self.http_client, url, &fetch_opts)?;
        let html = fetched.text_utf8(None);
        Ok(self.scrape_html(&html, &fetched.final_url))
    }

    /// Extract reviews from already-loaded page HTML. `url` is only used for logging.
    ///
    /// HTML parsing is lenient, so a page without review cards yields an empty list.
    pub fn scrape_html(&self, html: &str, url: &str) -> Vec<Review> {
        let doc = Html::parse_document(html);
        let reviews = extract_reviews(&doc, &self.selectors);
        tracing::info!(url, count = reviews.len(), "Extracted reviews from page");
        reviews
    }

    /// Scrape `url`, logging any failure and returning whatever was collected.
    pub fn collect(&self, url: &str) -> Vec<Review> {
        match self.scrape(url) {
            Ok(reviews) => reviews,
            Err(err) => {
                tracing::error!(url, error = %err, "Scrape failed; continuing with no reviews");
                Vec::new()
            }
        }
    }
}
