// ABOUTME: Serde models for the store's JSON customer reviews feed envelope.
// ABOUTME: Only the label fields needed to build a Review are decoded; everything else is ignored.

use serde::{Deserialize, Deserializer};

/// Decode `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `{ "label": "..." }` wrapper used for every scalar in the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryAuthor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: Label,
}

/// One review entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Label,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Label,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: EntryAuthor,
    #[serde(default, rename = "im:rating", deserialize_with = "null_as_default")]
    pub rating: Label,
}

/// `entry` is a bare object when the feed holds exactly one review.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entries {
    Many(Vec<Entry>),
    One(Box<Entry>),
}

impl Default for Entries {
    fn default() -> Self {
        Entries::Many(Vec::new())
    }
}

impl Entries {
    pub fn into_vec(self) -> Vec<Entry> {
        match self {
            Entries::Many(entries) => entries,
            Entries::One(entry) => vec![*entry],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entry: Entries,
}

/// Top-level document returned by the feed URL.
///
/// A missing or `null` `feed` or `entry` decodes as an empty feed; only
/// syntax errors and mistyped values are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub feed: FeedBody,
}
