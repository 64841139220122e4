//! Outbound request parameters and URL construction.
//!
//! Both `query` and `tags` are form-encoded, so free text containing `&`, `#`
//! or spaces can never corrupt the request line.

use url::Url;

use crate::types::Tag;

/// The full (query, tag, page) tuple for one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    pub query: String,
    /// `None` sends an empty `tags` parameter (no category filter).
    pub tag: Option<Tag>,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, tag: Option<Tag>, page: u32) -> Self {
        Self {
            query: query.into(),
            tag,
            page,
        }
    }

    /// Decoded parameter values, in wire order.
    pub fn params(&self) -> [(&'static str, String); 3] {
        [
            ("query", self.query.clone()),
            ("tags", self.tag.map(Tag::as_str).unwrap_or_default().to_string()),
            ("page", self.page.to_string()),
        ]
    }

    /// Append the encoded parameters to `endpoint`.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.params() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }
}
