//! Core types shared across HN Search: the tag filter, search rows returned by
//! Algolia, and the normalized result page.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTag;

/// Page size assumed when the response does not report a usable `hitsPerPage`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ---------------------------------------------------------------------------
// Tag filter
// ---------------------------------------------------------------------------

/// Content category recognized by the Algolia HN index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    #[default]
    Story,
    AskHn,
    ShowHn,
    Poll,
}

impl Tag {
    /// Every tag, in selector order.
    pub const ALL: [Tag; 4] = [Tag::Story, Tag::AskHn, Tag::ShowHn, Tag::Poll];

    /// Wire value sent in the `tags` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Story => "story",
            Tag::AskHn => "ask_hn",
            Tag::ShowHn => "show_hn",
            Tag::Poll => "poll",
        }
    }

    /// Human-readable option label.
    pub fn label(self) -> &'static str {
        match self {
            Tag::Story => "Story",
            Tag::AskHn => "Ask HN",
            Tag::ShowHn => "Show HN",
            Tag::Poll => "Poll",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Search rows and pages
// ---------------------------------------------------------------------------

/// One hit from the search API. Every field is optional upstream; `object_id`
/// falls back to an empty string so a malformed row never sinks the whole page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "objectID", default, deserialize_with = "null_as_empty")]
    pub object_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalized envelope of one server-side page.
///
/// `results_per_page` only feeds the display ordinal; the server has already
/// sliced `results`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage {
    pub results: Vec<SearchResult>,
    pub pages: u32,
    pub results_per_page: u32,
}

impl Default for ResultPage {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            pages: 0,
            results_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trips_through_wire_value() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>(), Ok(tag));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "comment".parse::<Tag>().unwrap_err();
        assert_eq!(err, UnknownTag("comment".into()));
        assert!(err.to_string().contains("ask_hn"));
    }

    #[test]
    fn default_tag_is_story() {
        assert_eq!(Tag::default(), Tag::Story);
    }

    #[test]
    fn labels_match_selector_options() {
        let labels: Vec<_> = Tag::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Story", "Ask HN", "Show HN", "Poll"]);
    }

    #[test]
    fn search_result_tolerates_missing_and_null_fields() {
        let row: SearchResult =
            serde_json::from_str(r#"{"objectID":"42","title":null}"#).unwrap();
        assert_eq!(row.object_id, "42");
        assert_eq!(row.title, None);
        assert_eq!(row.url, None);

        let null_id: SearchResult = serde_json::from_str(r#"{"objectID":null}"#).unwrap();
        assert_eq!(null_id.object_id, "");

        let empty: SearchResult = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SearchResult::default());
    }

    #[test]
    fn default_page_uses_algolia_page_size() {
        let page = ResultPage::default();
        assert!(page.results.is_empty());
        assert_eq!(page.pages, 0);
        assert_eq!(page.results_per_page, 20);
    }
}
