//! Fetching a page of news from the backend.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::models::NewsPage;
use crate::config::Config;
use crate::constants::{NEWS_ENDPOINT_PATH, USER_AGENT};

/// A failed fetch. Network, status and decode failures are one class to
/// callers; the variants only sharpen the log line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to decode news payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce a page of news.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to `limit` articles.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be fetched or decoded.
    async fn fetch_page(&self, limit: usize) -> Result<NewsPage, FetchError>;
}

#[async_trait]
impl<T: NewsSource + ?Sized> NewsSource for Arc<T> {
    async fn fetch_page(&self, limit: usize) -> Result<NewsPage, FetchError> {
        (**self).fetch_page(limit).await
    }
}

/// [`NewsSource`] backed by the HTTP news endpoint.
#[derive(Debug, Clone)]
pub struct HttpNewsSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpNewsSource {
    /// Build a source with its own client, using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the endpoint
    /// cannot be resolved against the base URL.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::new(client, &config.news_api_url)?)
    }

    /// Build a source on an existing client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint path cannot be joined to `base_url`.
    pub fn new(client: reqwest::Client, base_url: &Url) -> Result<Self, url::ParseError> {
        let endpoint = base_url.join(NEWS_ENDPOINT_PATH)?;
        Ok(Self { client, endpoint })
    }

    /// The endpoint without the page-size query.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn page_url(&self, limit: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        url
    }
}

#[async_trait]
impl NewsSource for HttpNewsSource {
    async fn fetch_page(&self, limit: usize) -> Result<NewsPage, FetchError> {
        let url = self.page_url(limit);
        debug!(url = %url, "Fetching news page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let page = NewsPage::from_json(&body)?;
        debug!(
            articles = page.articles.len(),
            has_stats = page.stats.is_some(),
            "Decoded news page"
        );
        Ok(page)
    }
}
