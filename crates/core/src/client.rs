//! Algolia HN search API client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};
use url::Url;

use crate::config::Config;
use crate::error::FetchError;
use crate::request::SearchRequest;
use crate::types::{ResultPage, SearchResult, DEFAULT_PAGE_SIZE};

/// Raw response envelope. Any field may be absent or null.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    hits: Option<Vec<SearchResult>>,
    #[serde(rename = "nbPages", default)]
    nb_pages: Option<u32>,
    #[serde(rename = "hitsPerPage", default)]
    hits_per_page: Option<u32>,
}

/// Client for one fixed search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http_client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, FetchError> {
        let endpoint = parse_endpoint(endpoint)?;
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hnsearch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(&config.endpoint, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and normalize one page. Never retries.
    #[instrument(skip(self, request), fields(query = %request.query, tag = ?request.tag, page = request.page))]
    pub async fn search(&self, request: &SearchRequest) -> Result<ResultPage, FetchError> {
        let url = request.to_url(&self.endpoint);
        debug!(url = %url, "Sending search request");

        let response = self.http_client.get(url).send().await.map_err(map_transport)?;

        let status = response.status();
        debug!(status = %status, "Received search response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Search API error");
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await.map_err(map_transport)?;
        trace!(body = %body, "Response body");

        let page = normalize(&body)?;
        debug!(
            hits = page.results.len(),
            pages = page.pages,
            per_page = page.results_per_page,
            "Search completed"
        );
        Ok(page)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, FetchError> {
    let invalid = |reason: String| FetchError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

fn map_transport(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        error!("Search request timed out");
        return FetchError::Timeout;
    }
    error!(error = %e, "Network error during search request");
    FetchError::Network(e)
}

/// Parse a response body into a [`ResultPage`], applying the tolerant defaults:
/// no hits, zero pages, and a page size of [`DEFAULT_PAGE_SIZE`] (also used
/// when the API reports a page size of zero).
pub fn normalize(body: &str) -> Result<ResultPage, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to parse search response");
        FetchError::InvalidResponse(format!("JSON parse error: {e}"))
    })?;
    if !value.is_object() {
        return Err(FetchError::InvalidResponse("expected a JSON object".into()));
    }

    let raw: ApiResponse = serde_json::from_value(value)
        .map_err(|e| FetchError::InvalidResponse(format!("unexpected shape: {e}")))?;

    Ok(ResultPage {
        results: raw.hits.unwrap_or_default(),
        pages: raw.nb_pages.unwrap_or(0),
        results_per_page: raw
            .hits_per_page
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE),
    })
}
