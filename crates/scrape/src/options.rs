// ABOUTME: Configuration options for the review scraper: Options and ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::error::ScrapeError;
use crate::extractors::review::ReviewSelectorSpec;
use crate::target::APPS_DOMAIN;

pub const DEFAULT_USER_AGENT: &str = concat!("appreviews/", env!("CARGO_PKG_VERSION"));

/// Configuration options for fetching and scraping.
#[derive(Debug, Clone)]
pub struct Options {
    pub timeout: Duration,
    pub user_agent: String,
    /// Hosts the client may visit, including after redirects. Empty means any host.
    pub allowed_domains: Vec<String>,
    pub headers: HashMap<String, String>,
    pub http_client: Option<reqwest::blocking::Client>,
    pub selectors: ReviewSelectorSpec,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            allowed_domains: vec![APPS_DOMAIN.to_string()],
            headers: HashMap::new(),
            http_client: None,
            selectors: ReviewSelectorSpec::default(),
        }
    }
}

impl Options {
    /// Options with no domain restriction, as used by the feed path.
    pub fn unrestricted() -> Self {
        Self {
            allowed_domains: Vec::new(),
            ..Self::default()
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Start from an existing set of options.
    pub fn with_options(opts: Options) -> Self {
        Self { opts }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Add a host to the allow-list.
    pub fn allowed_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into().to_lowercase();
        if !self.opts.allowed_domains.contains(&domain) {
            self.opts.allowed_domains.push(domain);
        }
        self
    }

    /// Replace the allow-list. An empty list disables the restriction.
    pub fn allowed_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opts.allowed_domains = domains.into_iter().map(|d| d.into().to_lowercase()).collect();
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom HTTP client. Timeout, user agent and redirect checks are then the caller's.
    pub fn http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Override the CSS selectors used to locate review fields.
    pub fn selectors(mut self, selectors: ReviewSelectorSpec) -> Self {
        self.opts.selectors = selectors;
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Result<Client, ScrapeError> {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_restrict_to_store_domain() {
        let opts = Options::default();
        assert_eq!(opts.allowed_domains, vec!["apps.apple.com".to_string()]);
        assert_eq!(opts.timeout, Duration::from_secs(30));
        assert!(opts.user_agent.starts_with("appreviews/"));
    }

    #[test]
    fn unrestricted_has_empty_allow_list() {
        assert!(Options::unrestricted().allowed_domains.is_empty());
    }

    #[test]
    fn allowed_domain_is_lowercased_and_deduplicated() {
        let builder = ClientBuilder::new()
            .allowed_domain("Example.COM")
            .allowed_domain("example.com");
        assert_eq!(
            builder.opts.allowed_domains,
            vec!["apps.apple.com".to_string(), "example.com".to_string()]
        );
    }

    #[test]
    fn allowed_domains_replaces_list() {
        let builder = ClientBuilder::new().allowed_domains(["127.0.0.1"]);
        assert_eq!(builder.opts.allowed_domains, vec!["127.0.0.1".to_string()]);
    }
}
