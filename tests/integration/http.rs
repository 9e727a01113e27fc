//! `/search` handler responses.

use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use shakesearch::server::{search, AppState, RawSearchParams};

use super::common::{searcher, spaced_corpus, HAMLET};

fn state(text: &str) -> Arc<AppState> {
    Arc::new(AppState {
        searcher: searcher(text),
    })
}

fn raw(q: Option<&str>, page: Option<&str>, page_size: Option<&str>) -> RawSearchParams {
    let pairs = [("q", q), ("page", page), ("pageSize", page_size)];
    RawSearchParams(
        pairs
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v.to_string())))
            .collect(),
    )
}

async fn call(state: Arc<AppState>, params: RawSearchParams) -> Response {
    match search(State(state), Query(params)).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn returns_json_array_of_snippets() {
    let response = call(state(HAMLET), raw(Some("To Be"), None, None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let snippets: Vec<String> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(snippets.len(), 3);
    assert!(snippets.iter().all(|s| s.contains("to be")));
}

#[tokio::test]
async fn missing_query_is_bad_request() {
    let response = call(state(HAMLET), raw(None, Some("0"), Some("20"))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "missing search query in URL params");
}

#[tokio::test]
async fn empty_query_is_bad_request() {
    let response = call(state(HAMLET), raw(Some(""), None, None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn no_match_is_empty_array() {
    let response = call(state(HAMLET), raw(Some("zzzqqqnonexistent"), None, None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "[]");
}

#[tokio::test]
async fn pagination_parameters_are_applied() {
    let text = spaced_corpus("romeo", 5, 12);

    let response = call(state(&text), raw(Some("romeo"), Some("1"), Some("5"))).await;
    let page: Vec<String> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(page.len(), 5);

    let response = call(state(&text), raw(Some("romeo"), Some("2"), Some("5"))).await;
    let page: Vec<String> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn bad_pagination_falls_back_to_defaults() {
    let text = spaced_corpus("romeo", 5, 30);

    let response = call(state(&text), raw(Some("romeo"), Some("first"), Some("lots"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page: Vec<String> = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(page.len(), 20);
}

#[tokio::test]
async fn page_beyond_range_is_empty_array() {
    let response = call(state(HAMLET), raw(Some("sleep"), Some("9999"), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "[]");
}
