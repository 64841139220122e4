//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use hnsearch_core::config::DEFAULT_ENDPOINT;
use hnsearch_core::{Config, SearchClient, SearchView};
use tracing::{error, info, warn};

/// Configuration and HTTP client — built once before launch.
pub struct AppState {
    pub config: Config,
    /// `None` only if no HTTP client could be built at all.
    pub client: Option<SearchClient>,
}

impl AppState {
    /// Build the client from `config`, falling back to the default endpoint
    /// when the configured one is unusable.
    pub fn new(mut config: Config) -> Self {
        let client = match SearchClient::from_config(&config) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(error = %e, "Falling back to {DEFAULT_ENDPOINT}");
                config.endpoint = DEFAULT_ENDPOINT.to_string();
                SearchClient::from_config(&config)
                    .map_err(|e| error!(error = %e, "Could not build HTTP client"))
                    .ok()
            }
        };
        info!(endpoint = %config.endpoint, tag = %config.default_tag, "Search view ready");
        AppState { config, client }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Config + client — set once at mount
pub static CORE: GlobalSignal<Option<AppState>> = Signal::global(|| None);

/// Query, tag, page, results and fetch phase
pub static VIEW: GlobalSignal<SearchView> = Signal::global(SearchView::default);
