// ABOUTME: Identifies the app whose reviews are collected and builds its store URLs.
// ABOUTME: Covers both the see-all reviews page and the customer reviews JSON feed.

/// Domain serving the reviews page; the scraper's default allow-list.
pub const APPS_DOMAIN: &str = "apps.apple.com";

/// Host serving the customer reviews feed.
pub const FEED_HOST: &str = "itunes.apple.com";

pub const DEFAULT_COUNTRY: &str = "gb";
pub const DEFAULT_SLUG: &str = "lloyds-mobile-banking";
pub const DEFAULT_APP_ID: &str = "469964520";

/// A single app listing in a single storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTarget {
    /// Two-letter storefront code, e.g. "gb".
    pub country: String,
    /// URL slug of the app name. Only the reviews page uses it.
    pub slug: String,
    /// Numeric store identifier.
    pub id: String,
}

impl Default for AppTarget {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            slug: DEFAULT_SLUG.to_string(),
            id: DEFAULT_APP_ID.to_string(),
        }
    }
}

impl AppTarget {
    pub fn new(
        country: impl Into<String>,
        slug: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into().to_lowercase(),
            slug: slug.into(),
            id: id.into(),
        }
    }

    /// URL of the page listing all reviews for the app.
    pub fn reviews_page_url(&self) -> String {
        format!(
            "https://{}/{}/app/{}/id{}?see-all=reviews",
            APPS_DOMAIN, self.country, self.slug, self.id
        )
    }

    /// URL of the JSON customer reviews feed for the app.
    pub fn feed_url(&self) -> String {
        format!(
            "https://{}/{}/rss/customerreviews/id={}/json",
            FEED_HOST, self.country, self.id
        )
    }
}
