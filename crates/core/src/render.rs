//! Pure projections of [`SearchView`] state into what the widgets display.

use serde::Serialize;

use crate::types::SearchResult;
use crate::view::SearchView;

/// 1-based number shown next to a row: `page_size * page + index + 1`.
pub fn display_ordinal(page_size: u32, page: u32, index: usize) -> u64 {
    u64::from(page_size) * u64::from(page) + index as u64 + 1
}

/// The row's URL when present and non-empty, else `fallback`.
pub fn link_target<'a>(result: &'a SearchResult, fallback: &'a str) -> &'a str {
    match result.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => fallback,
    }
}

pub fn header_text(page: u32, total_pages: u32) -> String {
    format!("page {page} of {total_pages}")
}

/// Enabled state of the Previous/Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Pagination {
    /// Next is bounded by the page count the service reported, not by how many
    /// rows happen to be on screen.
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self {
            prev_disabled: page == 0,
            next_disabled: page.saturating_add(1) >= total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Stable identity (the upstream `objectID`).
    pub key: String,
    pub ordinal: u64,
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_comments: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Everything the result section needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendering {
    pub header: String,
    pub rows: Vec<RenderedRow>,
    pub pagination: Pagination,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn render(view: &SearchView, fallback_url: &str) -> Rendering {
    let rows = view
        .results()
        .iter()
        .enumerate()
        .map(|(i, r)| RenderedRow {
            key: r.object_id.clone(),
            ordinal: display_ordinal(view.page_size(), view.page(), i),
            title: r.title.clone().unwrap_or_default(),
            href: link_target(r, fallback_url).to_string(),
            author: r.author.clone(),
            points: r.points,
            num_comments: r.num_comments,
            created_at: r.created_at.clone(),
        })
        .collect();

    Rendering {
        header: header_text(view.page(), view.total_pages()),
        rows,
        pagination: Pagination::new(view.page(), view.total_pages()),
        busy: view.is_loading(),
        error: view.error().map(str::to_string),
    }
}
