// ABOUTME: Resource handling module for fetching review pages and feeds over HTTP.
// ABOUTME: Handles domain allow-listing (including redirects), content-length limits, and charset decoding.

use std::collections::HashMap;
use std::io::{self, Read};

use bytes::Bytes;

use crate::error::ScrapeError;
use crate::options::Options;

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Raised by the redirect policy when a hop leaves the allow-list.
#[derive(Debug, thiserror::Error)]
#[error("redirect to forbidden domain {host} blocked")]
struct ForbiddenRedirect {
    host: String,
}

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    /// Empty means any host may be fetched.
    pub allowed_domains: Vec<String>,
}

impl From<&Options> for FetchOptions {
    fn from(opts: &Options) -> Self {
        Self {
            headers: opts.headers.clone(),
            allowed_domains: opts.allowed_domains.clone(),
        }
    }
}

/// Result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body as UTF-8 text, using charset hints from content-type header.
    pub fn text_utf8(&self, content_type_hint: Option<&str>) -> String {
        let ct = content_type_hint.or(self.content_type.as_deref());
        decode_body(&self.body, ct)
    }
}

/// Returns true if `host` may be visited under `allowed`.
pub fn is_allowed_domain(host: &str, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    let host = host.trim_end_matches('.').to_lowercase();
    allowed.iter().any(|d| d.eq_ignore_ascii_case(&host))
}

/// Build a blocking HTTP client honoring timeout, user agent and the allow-list on redirects.
pub fn build_http_client(opts: &Options) -> Result<reqwest::blocking::Client, ScrapeError> {
    let allowed = opts.allowed_domains.clone();
    let redirect_policy = reqwest::redirect::Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        let host = attempt.url().host_str().unwrap_or_default().to_string();
        if is_allowed_domain(&host, &allowed) {
            attempt.follow()
        } else {
            attempt.error(ForbiddenRedirect { host })
        }
    });

    reqwest::blocking::Client::builder()
        .redirect(redirect_policy)
        .user_agent(&opts.user_agent)
        .timeout(opts.timeout)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(|e| {
            ScrapeError::fetch(
                "",
                "BuildClient",
                Some(anyhow::anyhow!("failed to build HTTP client: {}", e)),
            )
        })
}

/// Decode body bytes to a String using charset from content-type header or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}

/// Returns true if `err` was raised by the allow-list check in the redirect policy.
fn is_forbidden_redirect(err: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        if cause.downcast_ref::<ForbiddenRedirect>().is_some() {
            return true;
        }
        source = cause.source();
    }
    false
}

fn request_error(url: &str, err: reqwest::Error) -> ScrapeError {
    if err.is_timeout() {
        return ScrapeError::timeout(url, "Fetch", Some(anyhow::Error::new(err)));
    }
    if err.is_redirect() && is_forbidden_redirect(&err) {
        return ScrapeError::forbidden_domain(url, "Fetch", Some(anyhow::Error::new(err)));
    }
    ScrapeError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", err)))
}

/// Read at most `limit` bytes. Returns `None` if the stream holds more.
fn read_capped<R: Read>(reader: R, limit: usize) -> io::Result<Option<Vec<u8>>> {
    let mut buf = Vec::new();
    reader.take(limit as u64 + 1).read_to_end(&mut buf)?;
    if buf.len() > limit {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// Fetch a resource from the given URL with a single GET.
pub fn fetch(
    client: &reqwest::blocking::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ScrapeError> {
    if url.is_empty() {
        return Err(ScrapeError::invalid_url(url, "Fetch", None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ScrapeError::invalid_url(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_url(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let host = parsed_url.host_str().unwrap_or_default();
    if !is_allowed_domain(host, &opts.allowed_domains) {
        return Err(ScrapeError::forbidden_domain(
            url,
            "Fetch",
            Some(anyhow::anyhow!("{} is not in the allowed domains", host)),
        ));
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    tracing::debug!(url, "Sending request");
    let response = request.send().map_err(|e| request_error(url, e))?;

    // A caller-supplied client may not carry the redirect policy.
    if let Some(final_host) = response.url().host_str() {
        if !is_allowed_domain(final_host, &opts.allowed_domains) {
            return Err(ScrapeError::forbidden_domain(
                url,
                "Fetch",
                Some(anyhow::anyhow!("redirected to forbidden domain {}", final_host)),
            ));
        }
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let status = response.status();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    // Chunked responses carry no Content-Length, so the cap is enforced while reading.
    let body = match read_capped(response, MAX_CONTENT_LENGTH) {
        Ok(Some(buf)) => Bytes::from(buf),
        Ok(None) => {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("content too large")),
            ))
        }
        Err(e) => {
            return Err(ScrapeError::fetch(
                url,
                "Fetch",
                Some(anyhow::anyhow!("failed to read body: {}", e)),
            ))
        }
    };

    if !status.is_success() {
        return Err(ScrapeError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("HTTP status {}", status.as_u16())),
        ));
    }

    tracing::debug!(url, status = status.as_u16(), bytes = body.len(), "Fetched");

    Ok(FetchResult {
        status: status.as_u16(),
        url: url.to_string(),
        final_url,
        content_type,
        body,
    })
}
