// ABOUTME: Integration tests for customer reviews feed parsing.
// ABOUTME: Tests entry-count preservation, label mapping, and malformed body handling.

use appreviews_feed::{parse_feed_bytes, FeedError};
use appreviews_scrape::Review;
use pretty_assertions::assert_eq;

/// Shape of the store feed with the fields it actually carries per entry.
const FEED: &str = r#"{
  "feed": {
    "author": {"name": {"label": "iTunes Store"}, "uri": {"label": "http://www.apple.com/uk/itunes/"}},
    "entry": [
      {
        "author": {"uri": {"label": "https://itunes.apple.com/gb/reviews/id1"}, "name": {"label": "Dissatisfied_1"}, "label": ""},
        "updated": {"label": "2024-03-01T10:15:00-07:00"},
        "im:rating": {"label": "1"},
        "im:version": {"label": "120.12"},
        "id": {"label": "11111111111"},
        "title": {"label": "Can't log in"},
        "content": {"label": "Face ID fails every time.", "attributes": {"type": "text"}},
        "link": {"attributes": {"rel": "related", "href": "https://itunes.apple.com/gb/review?id=469964520&type=Purple%20Software"}},
        "im:voteSum": {"label": "0"},
        "im:contentType": {"attributes": {"term": "Application", "label": "Application"}},
        "im:voteCount": {"label": "0"}
      },
      {
        "author": {"name": {"label": "Fan_2"}},
        "im:rating": {"label": "5"},
        "title": {"label": "Great"},
        "content": {"label": "Simple and reliable.\nWould recommend.", "attributes": {"type": "text"}}
      },
      {
        "author": {"name": {"label": "Fan_2"}},
        "im:rating": {"label": "5"},
        "title": {"label": "Great"},
        "content": {"label": "Simple and reliable.\nWould recommend.", "attributes": {"type": "text"}}
      }
    ],
    "title": {"label": "iTunes Store: Customer Reviews"}
  }
}"#;

#[test]
fn test_entry_count_preserved() {
    let reviews = parse_feed_bytes(FEED.as_bytes()).unwrap();
    assert_eq!(reviews.len(), 3, "one review per feed entry, duplicates kept");
}

#[test]
fn test_labels_mapped_to_review_fields() {
    let reviews = parse_feed_bytes(FEED.as_bytes()).unwrap();
    assert_eq!(
        reviews[0],
        Review::new("Can't log in", "1", "Face ID fails every time.", "Dissatisfied_1")
    );
    assert_eq!(reviews[1].content, "Simple and reliable.\nWould recommend.");
    assert_eq!(reviews[1], reviews[2]);
}

#[test]
fn test_empty_entry_list() {
    let reviews = parse_feed_bytes(br#"{"feed":{"entry":[]}}"#).unwrap();
    assert!(reviews.is_empty());
}

#[test]
fn test_malformed_json_is_parse_error() {
    for body in [&b"{\"feed\": {\"entry\": ["[..], &b"<html>Not Found</html>"[..], &b""[..]] {
        let err = parse_feed_bytes(body).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)), "expected parse error for {:?}", body);
    }
}
