//! HTTP client for backend requests

use super::user_agent::{accept_html, accept_language, generate_user_agent};
use crate::backend::{BackendRequest, BackendResponse};
use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// reqwest wrapper carrying the socket timeout and browser-shaped
/// headers every backend request shares
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a client from outgoing settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: generate_user_agent(),
        })
    }

    /// Issue a backend request and capture the response body
    pub async fn execute(&self, request: BackendRequest) -> Result<BackendResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language());

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        if !request.cookies.is_empty() {
            let cookie_str = request
                .cookies
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            req_builder = req_builder.header("Cookie", cookie_str);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(BackendResponse { status, text, url })
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }
}
