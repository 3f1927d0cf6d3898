use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use super::Lang;
use super::types::{ErrorResponse, SearchItem, SearchResponse};
use crate::config::{ApiKey, Credentials};

const API_BASE: &str = "https://www.googleapis.com/customsearch/v1";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_START: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("connection error: could not resolve the host or the network is unreachable")]
    Connection(#[source] reqwest::Error),

    #[error("request exceeded the {}s timeout", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("failed to parse JSON response: {0}")]
    Parse(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Timeout,
    Http,
    Parse,
    Unexpected,
}

impl SearchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SearchError::Connection(_) => FailureKind::Connection,
            SearchError::Timeout(_) => FailureKind::Timeout,
            SearchError::Http(_) => FailureKind::Http,
            SearchError::Parse(_) => FailureKind::Parse,
            SearchError::Unexpected(_) => FailureKind::Unexpected,
        }
    }
}

/// Fetches one page of web results for a query.
pub trait SearchClient {
    async fn search(
        &self,
        query: &str,
        start: u32,
        lang: &Lang,
    ) -> Result<Vec<SearchItem>, SearchError>;
}

#[derive(Clone)]
pub struct CustomSearchClient {
    http: Client,
    api_key: ApiKey,
    search_engine_id: String,
    base_url: String,
    timeout: Duration,
}

impl CustomSearchClient {
    pub fn new(http: Client, credentials: Credentials) -> Self {
        Self {
            http,
            api_key: credentials.api_key().clone(),
            search_engine_id: credentials.search_engine_id().to_string(),
            base_url: API_BASE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::new(http, Credentials::new("test-key", "test-cx"))
        }
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_url(&self, query: &str, start: u32, lang: &Lang) -> Result<Url, SearchError> {
        let start = start.to_string();
        let lr = lang.to_lr();
        Url::parse_with_params(
            &self.base_url,
            [
                ("key", self.api_key.as_str()),
                ("cx", self.search_engine_id.as_str()),
                ("q", query),
                ("start", start.as_str()),
                ("lr", lr.as_str()),
            ],
        )
        .map_err(|e| SearchError::Unexpected(format!("invalid endpoint '{}': {e}", self.base_url)))
    }

    fn classify(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout(self.timeout)
        } else if e.is_connect() {
            SearchError::Connection(e)
        } else if e.is_decode() {
            SearchError::Parse(e.to_string())
        } else if e.is_builder() {
            SearchError::Unexpected(format!("{e:?}"))
        } else {
            SearchError::Http(e.to_string())
        }
    }
}

impl SearchClient for CustomSearchClient {
    async fn search(
        &self,
        query: &str,
        start: u32,
        lang: &Lang,
    ) -> Result<Vec<SearchItem>, SearchError> {
        let url = self.build_url(query, start, lang)?;

        debug_assert!(
            url.scheme() == "https" || cfg!(test),
            "API key must only be sent over HTTPS"
        );

        let response = self
            .http
            .get(url)
            .header("User-Agent", crate::USER_AGENT)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let message = extract_error_message(&text);
            return Err(SearchError::Http(format!("HTTP {status}: {message}")));
        }

        let body: SearchResponse =
            serde_json::from_str(&text).map_err(|e| SearchError::Parse(e.to_string()))?;
        let items = body.items.unwrap_or_default();
        debug!(query, start, lr = %lang.to_lr(), items = items.len(), "search complete");
        Ok(items)
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            let end = body.floor_char_boundary(200);
            body[..end].to_string()
        })
}

/// Runs one search and folds every failure into `None` after logging it once.
pub async fn search_or_log(
    client: &impl SearchClient,
    query: &str,
    start: u32,
    lang: &Lang,
) -> Option<Vec<SearchItem>> {
    match client.search(query, start, lang).await {
        Ok(items) => Some(items),
        Err(e) => {
            log_failure(&e);
            None
        }
    }
}

fn log_failure(e: &SearchError) {
    let kind = e.kind();
    match e {
        SearchError::Connection(_) => {
            error!(?kind, "connection error: could not resolve the host or there is no network")
        }
        SearchError::Timeout(limit) => {
            error!(?kind, timeout_secs = limit.as_secs_f32(), "the request timed out")
        }
        SearchError::Http(detail) => error!(?kind, "HTTP request failed: {detail}"),
        SearchError::Parse(err) => error!(?kind, "failed to parse JSON response: {err}"),
        SearchError::Unexpected(_) => error!(?kind, "unexpected error: {e:?}"),
    }
}
