//! Test harness for client integration tests.
//!
//! Starts a local axum server that stands in for the Algolia search endpoint,
//! records the raw query string of every request, and answers with a canned reply.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use hnsearch_core::SearchClient;
use tokio::net::TcpListener;

pub const SEARCH_PATH: &str = "/api/v1/search";

/// What the mock endpoint answers with.
#[derive(Clone)]
pub enum Reply {
    Json(String),
    Status(u16, String),
    Delayed(Duration, String),
}

#[derive(Clone)]
struct Shared {
    reply: Reply,
    seen: Arc<Mutex<Vec<String>>>,
}

pub struct MockApi {
    pub endpoint: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    pub async fn start(reply: Reply) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let shared = Shared {
            reply,
            seen: Arc::clone(&seen),
        };
        let app = Router::new().route(SEARCH_PATH, get(search)).with_state(shared);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api server");
        });

        Self {
            endpoint: format!("http://{addr}{SEARCH_PATH}"),
            seen,
        }
    }

    pub fn client(&self) -> SearchClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> SearchClient {
        SearchClient::new(&self.endpoint, timeout).expect("client for mock api")
    }

    /// Raw (still encoded) query strings, in arrival order.
    pub fn raw_queries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

async fn search(State(shared): State<Shared>, uri: Uri) -> Response {
    shared
        .seen
        .lock()
        .unwrap()
        .push(uri.query().unwrap_or_default().to_string());

    match shared.reply {
        Reply::Json(body) => json(body),
        Reply::Status(code, body) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
        Reply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            json(body)
        }
    }
}

fn json(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
