//! HTTP fetch-and-parse collaborator
//!
//! Fetches a URL and returns the parsed DOM. The `HtmlFetcher` trait is the
//! seam between the crawler and the network, so the crawl pipeline can be
//! exercised against canned documents in tests.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use scraper::Html;
use tracing::{debug, error, info};

use super::error::{FetchError, FetchResult};

/// Configuration for HTTP client behavior
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "grocery-crawl/0.1".to_string(),
        }
    }
}

/// Capability to fetch a URL and return its parsed document.
#[async_trait]
pub trait HtmlFetcher {
    async fn fetch_html(&self, url: &str) -> FetchResult<Html>;
}

/// HTTP client backed by `reqwest`. One blocking-style sequential request
/// at a time; the crawler never overlaps fetches.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HtmlFetcher for HttpClient {
    async fn fetch_html(&self, url: &str) -> FetchResult<Html> {
        info!("Fetching HTML from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("HTTP error {}: {}", status, url);
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(Html::parse_document(&body))
    }
}
