//! Backend trait and wire types

use std::collections::HashMap;

/// One candidate entry returned by a search backend, in rank order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    /// Opaque backend id
    pub id: String,
    /// Video title
    pub title: String,
    /// Canonical watch URL built from the id
    pub url: String,
    /// Duration in whole seconds
    pub duration_secs: u64,
}

/// HTTP request a backend wants issued
#[derive(Debug, Clone, Default)]
pub struct BackendRequest {
    /// URL to request
    pub url: String,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Cookies to send
    pub cookies: HashMap<String, String>,
}

impl BackendRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a cookie
    pub fn cookie(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(key.into(), value.into());
        self
    }
}

/// Captured HTTP response handed back to the backend for parsing
#[derive(Debug)]
pub struct BackendResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl BackendResponse {
    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A video search backend: builds the outbound request for a free-text
/// query and parses the response into candidate entries.
pub trait SearchBackend: Send + Sync {
    /// Backend name, used in logs
    fn name(&self) -> &str;

    /// Build the HTTP request for a search
    fn request(&self, query: &str) -> anyhow::Result<BackendRequest>;

    /// Parse the response body into candidates, best-ranked first
    fn response(&self, response: BackendResponse) -> anyhow::Result<Vec<VideoEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = BackendRequest::get("https://example.com/results")
            .param("search_query", "a song")
            .cookie("CONSENT", "YES+");

        assert_eq!(request.url, "https://example.com/results");
        assert_eq!(request.params.get("search_query").map(String::as_str), Some("a song"));
        assert_eq!(request.cookies.get("CONSENT").map(String::as_str), Some("YES+"));
    }

    #[test]
    fn test_response_success() {
        let ok = BackendResponse {
            status: 200,
            text: String::new(),
            url: String::new(),
        };
        assert!(ok.is_success());

        let rate_limited = BackendResponse {
            status: 429,
            text: String::new(),
            url: String::new(),
        };
        assert!(!rate_limited.is_success());
    }
}
