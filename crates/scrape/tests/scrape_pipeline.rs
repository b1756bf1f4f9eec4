// ABOUTME: Integration tests for the scrape path from HTTP fetch to JSON file.
// ABOUTME: Covers populated pages, pages without reviews, and swallowed fetch failures.

use std::fs;

use appreviews_scrape::{output, Client, Review};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn local_client() -> Client {
    Client::builder()
        .allowed_domains(["127.0.0.1"])
        .build()
        .expect("client should build")
}

fn review_card(title: &str, stars: u8, body: &str, user: &str) -> String {
    format!(
        r#"<div class="we-customer-review">
  <figure class="we-star-rating" aria-label="{stars} out of 5"></figure>
  <h3 class="we-customer-review__title">{title}</h3>
  <span class="we-customer-review__user">{user}</span>
  <blockquote class="we-customer-review__body"><div class="we-truncate__text">{body}</div></blockquote>
</div>"#
    )
}

#[test]
fn page_reviews_written_as_indented_json() {
    let server = MockServer::start();
    let page = format!(
        "<html><body>{}{}</body></html>",
        review_card("Slow", 2, "Takes ages to load.", "a_user"),
        review_card("Love it", 5, "Quick &amp; easy.", "b_user"),
    );
    let mock = server.mock(|when, then| {
        when.method(GET).path("/gb/app/bank/id42");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(page);
    });

    let reviews = local_client().collect(&server.url("/gb/app/bank/id42?see-all=reviews"));
    mock.assert();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(output::SCRAPE_OUTPUT_FILE);
    output::write_reviews(&path, &reviews).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("[\n  {\n    \"title\": \"Slow\""));

    let back: Vec<Review> = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        back,
        vec![
            Review::new("Slow", "2 out of 5", "Takes ages to load.", "a_user"),
            Review::new("Love it", "5 out of 5", "Quick & easy.", "b_user"),
        ]
    );
}

#[test]
fn page_without_reviews_writes_empty_array() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/empty");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body><p>No Ratings or Reviews</p></body></html>");
    });

    let reviews = local_client().collect(&server.url("/empty"));
    mock.assert();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(output::SCRAPE_OUTPUT_FILE);
    output::write_reviews(&path, &reviews).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn failed_fetch_still_produces_output() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(500);
    });

    let reviews = local_client().collect(&server.url("/gone"));
    mock.assert();
    assert!(reviews.is_empty());

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(output::SCRAPE_OUTPUT_FILE);
    output::write_reviews(&path, &reviews).unwrap();
    let raw = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}
