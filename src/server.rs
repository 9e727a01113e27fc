//! HTTP surface: `GET /search` plus static files for everything else.
//!
//! Query parameters are read leniently. Only a missing or empty `q` is
//! rejected; `page` and `pageSize` fall back to their defaults when absent
//! or unparseable.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::search::{PageRequest, Searcher};

/// Application state shared across all handlers
pub struct AppState {
    pub searcher: Searcher,
}

/// Error wrapper for API handlers
#[derive(Debug)]
pub enum ApiError {
    MissingQuery,
    Encoding(serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                "missing search query in URL params",
            ),
            ApiError::Encoding(e) => {
                tracing::error!("failed to encode search results: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure")
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

/// `/search` query string as sent, in order.
///
/// Extracted as raw pairs so a repeated key or a bad number never fails
/// extraction; the first value of each key wins.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct RawSearchParams(pub Vec<(String, String)>);

impl RawSearchParams {
    /// First value given for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parsed `/search` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: PageRequest,
}

impl SearchParams {
    /// Validate `q` and resolve `page` / `pageSize`.
    ///
    /// Unparseable numbers take the defaults; range clamping is left to
    /// [`PageRequest::new`].
    pub fn from_raw(raw: &RawSearchParams) -> Result<Self, ApiError> {
        let query = raw
            .first("q")
            .filter(|q| !q.is_empty())
            .ok_or(ApiError::MissingQuery)?;

        let defaults = PageRequest::default();
        let page = parse_or(raw.first("page"), defaults.page as i64);
        let page_size = parse_or(raw.first("pageSize"), defaults.page_size as i64);

        Ok(Self {
            query: query.to_string(),
            page: PageRequest::new(page, page_size),
        })
    }
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// Create the HTTP router: `/search` and a static file fallback.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/search", get(search))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Search the corpus and return one page of snippets as a JSON array.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(raw): Query<RawSearchParams>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from_raw(&raw).inspect_err(|_| {
        tracing::warn!("rejected search without query");
    })?;

    let results = state.searcher.search_page(&params.query, params.page);
    tracing::debug!(
        query = %params.query,
        page = params.page.page,
        page_size = params.page.page_size,
        returned = results.len(),
        "search"
    );

    let body = serde_json::to_vec(&results).map_err(ApiError::Encoding)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
