//! Giphy: server-side GIF search behind the `/api/gifs` proxy.
//!
//! DESIGN
//! ======
//! The API key stays on the host. Handlers depend on the `GifSource` trait so
//! route tests can swap in a fake; `GiphyClient` is the production source,
//! built from environment variables by [`GiphyClient::from_env`].

pub mod config;
pub mod types;

use std::time::Duration;

use config::GiphyConfig;
use types::{GiphyError, MediaItem, parse_response};

/// Search and trending lookups returning normalized media items.
#[async_trait::async_trait]
pub trait GifSource: Send + Sync {
    /// Keyword search. `term` is already trimmed and non-empty.
    ///
    /// # Errors
    ///
    /// Returns a [`GiphyError`] if the request fails or the body is not JSON.
    async fn search(&self, term: &str) -> Result<Vec<MediaItem>, GiphyError>;

    /// Currently trending GIFs.
    ///
    /// # Errors
    ///
    /// Returns a [`GiphyError`] if the request fails or the body is not JSON.
    async fn trending(&self) -> Result<Vec<MediaItem>, GiphyError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct GiphyClient {
    http: reqwest::Client,
    config: GiphyConfig,
}

impl GiphyClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a value fails to parse, or
    /// the HTTP client fails to build.
    pub fn from_env() -> Result<Self, GiphyError> {
        Self::from_config(GiphyConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: GiphyConfig) -> Result<Self, GiphyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GiphyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.config.limit
    }

    #[must_use]
    pub fn rating(&self) -> &str {
        &self.config.rating
    }

    async fn fetch(&self, endpoint: &str, term: Option<&str>) -> Result<Vec<MediaItem>, GiphyError> {
        let url = format!("{}/gifs/{endpoint}", self.config.base_url);
        let limit = self.config.limit.to_string();
        let mut query = vec![
            ("api_key", self.config.api_key.as_str()),
            ("limit", limit.as_str()),
            ("rating", self.config.rating.as_str()),
        ];
        if let Some(term) = term {
            query.push(("q", term));
        }

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GiphyError::ApiRequest(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GiphyError::ApiRequest(e.without_url().to_string()))?;

        if status != 200 {
            return Err(GiphyError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl GifSource for GiphyClient {
    async fn search(&self, term: &str) -> Result<Vec<MediaItem>, GiphyError> {
        self.fetch("search", Some(term)).await
    }

    async fn trending(&self) -> Result<Vec<MediaItem>, GiphyError> {
        self.fetch("trending", None).await
    }
}
