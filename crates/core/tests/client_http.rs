//! Integration tests for `SearchClient` against a local mock of the search API.

mod helpers;

use std::time::Duration;

use helpers::{MockApi, Reply};
use hnsearch_core::render::render;
use hnsearch_core::{FetchError, ResultPage, SearchClient, SearchRequest, SearchView, Tag};

const FULL_PAGE: &str = r#"{
    "hits": [
        {"objectID": "1", "title": "A", "url": "http://a", "author": "pg", "points": 10, "num_comments": 2},
        {"objectID": "2", "title": "B", "url": ""}
    ],
    "nbPages": 3,
    "hitsPerPage": 20,
    "page": 0,
    "query": "rust"
}"#;

// ---------------------------------------------------------------------------
// Request encoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_params_are_encoded_on_the_wire() {
    let api = MockApi::start(Reply::Json("{}".into())).await;
    let request = SearchRequest::new("rust & go #2", Some(Tag::ShowHn), 2);
    api.client().search(&request).await.unwrap();

    let raw = api.raw_queries();
    assert_eq!(raw, vec!["query=rust+%26+go+%232&tags=show_hn&page=2".to_string()]);

    let decoded: Vec<(String, String)> = url::form_urlencoded::parse(raw[0].as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(decoded[0], ("query".into(), "rust & go #2".into()));
    assert_eq!(decoded[1], ("tags".into(), "show_hn".into()));
    assert_eq!(decoded[2], ("page".into(), "2".into()));
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_full_payload_is_normalized() {
    let api = MockApi::start(Reply::Json(FULL_PAGE.into())).await;
    let page = api.client().search(&SearchRequest::default()).await.unwrap();

    assert_eq!(page.pages, 3);
    assert_eq!(page.results_per_page, 20);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].object_id, "1");
    assert_eq!(page.results[0].author.as_deref(), Some("pg"));
    assert_eq!(page.results[1].url.as_deref(), Some(""));
}

#[tokio::test]
async fn test_empty_object_uses_defaults() {
    let api = MockApi::start(Reply::Json("{}".into())).await;
    let page = api.client().search(&SearchRequest::default()).await.unwrap();
    assert_eq!(page, ResultPage::default());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_error_status_is_reported() {
    let api = MockApi::start(Reply::Status(503, "upstream down".into())).await;
    let err = api.client().search(&SearchRequest::default()).await.unwrap_err();
    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let api = MockApi::start(Reply::Json("<html>oops</html>".into())).await;
    let err = api.client().search(&SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let api = MockApi::start(Reply::Delayed(Duration::from_secs(3), "{}".into())).await;
    let client = api.client_with_timeout(Duration::from_millis(200));
    let err = client.search(&SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        SearchClient::new(&format!("http://{addr}/api/v1/search"), Duration::from_secs(2)).unwrap();
    let err = client.search(&SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}

// ---------------------------------------------------------------------------
// View + client
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_view_cycle_against_api() {
    let api = MockApi::start(Reply::Json(FULL_PAGE.into())).await;
    let client = api.client();
    let mut view = SearchView::default();

    let ticket = view.set_query("rust").expect("query change fetches");
    assert!(view.is_loading());
    let outcome = client.search(&ticket.request).await;
    assert!(view.settle(ticket.token, outcome));

    let out = render(&view, "https://fallback.example/");
    assert_eq!(out.header, "page 0 of 3");
    assert!(!out.busy);
    assert!(out.pagination.prev_disabled);
    assert!(!out.pagination.next_disabled);
    assert_eq!(out.rows[0].ordinal, 1);
    assert_eq!(out.rows[1].href, "https://fallback.example/");
    assert_eq!(api.raw_queries(), vec!["query=rust&tags=story&page=0".to_string()]);
}

#[tokio::test]
async fn test_out_of_order_responses_keep_latest() {
    let api = MockApi::start(Reply::Json(FULL_PAGE.into())).await;
    let client = api.client();
    let mut view = SearchView::default();

    let first = view.set_query("ru").unwrap();
    let second = view.set_query("rust").unwrap();

    let (a, b) = tokio::join!(client.search(&first.request), client.search(&second.request));
    assert!(view.settle(second.token, b));
    assert!(!view.settle(first.token, a));
    assert_eq!(view.query(), "rust");
    assert_eq!(view.results().len(), 2);
}

#[tokio::test]
async fn test_failed_fetch_surfaces_error_in_view() {
    let api = MockApi::start(Reply::Status(500, "boom".into())).await;
    let mut view = SearchView::default();
    let ticket = view.begin_fetch();
    let outcome = api.client().search(&ticket.request).await;
    view.settle(ticket.token, outcome);

    assert!(!view.is_loading());
    assert_eq!(view.error(), Some("Search API error: 500 - boom"));
}
