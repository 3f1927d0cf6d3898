use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Option<Vec<SearchItem>>,
}

/// One result entry. Every field may be missing from the API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchItem {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}
