//! HTTP client for the Quotery API.
//!
//! This module provides the client used by rendering surfaces to talk
//! to the query endpoint. It mirrors the endpoint's three variants:
//! random, by id, and by tag.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use quotery_core::{Error, Quote, Result};

use crate::fetcher::QuoteFetcher;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error payload shape returned by the API on 404/500.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the quotes query endpoint.
///
/// # Example
///
/// ```ignore
/// let client = QuotesApiClient::new("http://localhost:8080")?;
/// let quote = client.random_quote().await?;
/// ```
#[derive(Debug, Clone)]
pub struct QuotesApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuotesApiClient {
    /// Create a new API client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a uniformly random quote.
    pub async fn random_quote(&self) -> Result<Quote> {
        self.get("/api/v1/quotes").await
    }

    /// Fetch the quote with the given id. A miss surfaces as
    /// [`Error::NotFound`].
    pub async fn quote_by_id(&self, id: &str) -> Result<Quote> {
        self.get(&format!("/api/v1/quotes?id={}", urlencoding::encode(id)))
            .await
    }

    /// Fetch all quotes carrying the given tag, in seed order. A tag
    /// no quote carries surfaces as [`Error::NotFound`].
    pub async fn quotes_by_tag(&self, tag: &str) -> Result<Vec<Quote>> {
        self.get(&format!("/api/v1/quotes?tag={}", urlencoding::encode(tag)))
            .await
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("[QuotesApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// Parse an HTTP response, handling error payloads appropriately.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|err| err.message.or(err.error))
                .unwrap_or_else(|| format!("HTTP {}", status));
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(message));
            }
            return Err(Error::Unexpected(format!("API error: {}", message)));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Transport(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl QuoteFetcher for QuotesApiClient {
    async fn fetch_random(&self) -> Result<Quote> {
        self.random_quote().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = QuotesApiClient::new("http://localhost:8080");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_url_normalization() {
        let client = QuotesApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
