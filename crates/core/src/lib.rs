//! HN Search core — everything behind the search view except the widgets.
//!
//! # Modules
//!
//! - [`types`] — Tag filter, search rows, normalized result pages
//! - [`request`] — (query, tag, page) parameters and URL encoding
//! - [`client`] — Async Algolia client and response normalization
//! - [`view`] — Search view state machine with request tokens
//! - [`render`] — Pure projections: ordinals, link targets, header, pagination
//! - [`config`] — Defaults, `config.toml`, environment overrides
//! - [`error`] — Fetch and parse errors

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod request;
pub mod types;
pub mod view;

use std::path::PathBuf;

pub use client::SearchClient;
pub use config::Config;
pub use error::FetchError;
pub use request::SearchRequest;
pub use types::{ResultPage, SearchResult, Tag};
pub use view::{FetchTicket, SearchView};

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.hnsearch` on Unix, `%APPDATA%/hnsearch` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("hnsearch"))
    } else {
        home_dir().map(|h| h.join(".hnsearch"))
    }
}
