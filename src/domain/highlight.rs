// src/domain/highlight.rs
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A text annotation on a bookmarked page, as returned by `/bookmarks/annotations`.
///
/// Fields absent from the payload (or `null`) decode to their empty value so a
/// sparse record still yields a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub href: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmark_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmark_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bookmark_href: String,
    #[serde(default)]
    pub created: Option<DateTime<FixedOffset>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
