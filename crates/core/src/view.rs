//! Search view state: the input controller plus fetch sequencing.
//!
//! Every input operation that changes the effective (query, tag, page) tuple
//! returns a [`FetchTicket`]; the caller runs the request and hands the outcome
//! back to [`SearchView::settle`]. Each ticket carries a monotonically increasing
//! token and only the latest token may update state, so a slow response for an
//! abandoned query can never overwrite a newer one.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::request::SearchRequest;
use crate::types::{ResultPage, SearchResult, Tag, DEFAULT_PAGE_SIZE};

/// Where the view is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested yet.
    #[default]
    Idle,
    Fetching,
    Ready,
    /// The current fetch failed; holds a user-facing message.
    Failed(String),
}

/// One fetch the caller must run and then settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    query: String,
    tag: Tag,
    page: u32,
    results: Vec<SearchResult>,
    total_pages: u32,
    page_size: u32,
    phase: Phase,
    latest_token: u64,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new("", Tag::default(), 0)
    }
}

impl SearchView {
    pub fn new(query: impl Into<String>, tag: Tag, page: u32) -> Self {
        Self {
            query: query.into(),
            tag,
            page,
            results: Vec::new(),
            total_pages: 0,
            page_size: DEFAULT_PAGE_SIZE,
            phase: Phase::Idle,
            latest_token: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True exactly while the current fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Input controller
    // -----------------------------------------------------------------------

    /// Replace the query and rewind to page 0.
    pub fn set_query(&mut self, text: impl Into<String>) -> Option<FetchTicket> {
        let text = text.into();
        if text == self.query && self.page == 0 {
            return None;
        }
        self.query = text;
        self.page = 0;
        Some(self.begin_fetch())
    }

    /// Replace the tag and rewind to page 0.
    pub fn set_tag(&mut self, tag: Tag) -> Option<FetchTicket> {
        if tag == self.tag && self.page == 0 {
            return None;
        }
        self.tag = tag;
        self.page = 0;
        Some(self.begin_fetch())
    }

    /// Advance one page. Bounds are left to the caller's disabled controls.
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        let next = self.page.checked_add(1)?;
        self.page = next;
        Some(self.begin_fetch())
    }

    /// Go back one page; a no-op at page 0.
    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        let prev = self.page.checked_sub(1)?;
        self.page = prev;
        Some(self.begin_fetch())
    }

    // -----------------------------------------------------------------------
    // Fetch sequencing
    // -----------------------------------------------------------------------

    /// Start a fetch for the current tuple, superseding any in flight.
    /// Also used for the initial fetch at mount.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_token += 1;
        self.phase = Phase::Fetching;
        self.results.clear();
        debug!(
            token = self.latest_token,
            query = %self.query,
            tag = %self.tag,
            page = self.page,
            "Fetch started"
        );
        FetchTicket {
            token: self.latest_token,
            request: SearchRequest::new(self.query.clone(), Some(self.tag), self.page),
        }
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest_token && self.phase == Phase::Fetching
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) when the
    /// token has been superseded or already settled.
    pub fn settle(&mut self, token: u64, outcome: Result<ResultPage, FetchError>) -> bool {
        if !self.is_current(token) {
            debug!(token, latest = self.latest_token, "Discarding stale search response");
            return false;
        }

        match outcome {
            Ok(page) => {
                self.results = page.results;
                self.total_pages = page.pages;
                self.page_size = page.results_per_page;
                self.phase = Phase::Ready;
            }
            Err(e) => {
                warn!(token, error = %e, "Search failed");
                self.results.clear();
                self.total_pages = 0;
                self.phase = Phase::Failed(e.to_string());
            }
        }
        true
    }
}
