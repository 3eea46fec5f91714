//! News Search Service
//!
//! Pluggable news search behind the `NewsSearch` trait, with a SerpAPI
//! (Google News engine) provider. The client enforces its own timeout;
//! callers add none.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use lexsight_llm::build_http_client;

/// A news article entry returned by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub source: String,
    pub link: String,
}

/// Errors from the news-search capability.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Search API error: {0}")]
    Api(String),

    #[error("Failed to parse search response: {0}")]
    Parse(String),
}

/// Trait for pluggable news-search providers.
#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Provider name for display
    fn name(&self) -> &str;

    /// Execute a news search for the given query and locale (e.g. "fr").
    ///
    /// An empty result list is a normal outcome, distinct from `Err`.
    async fn search(&self, query: &str, locale: &str) -> Result<Vec<NewsArticle>, SearchError>;
}

/// SerpAPI Google News provider (requires API key).
pub struct SerpApiNews {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiNews {
    const DEFAULT_BASE_URL: &'static str = "https://serpapi.com/search.json";

    /// Create a new SerpAPI provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(Duration::from_secs(15)),
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint (for testing against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NewsSearch for SerpApiNews {
    fn name(&self) -> &str {
        "SerpAPI Google News"
    }

    async fn search(&self, query: &str, locale: &str) -> Result<Vec<NewsArticle>, SearchError> {
        tracing::debug!(query, locale, "news search");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("engine", "google_news"),
                ("q", query),
                ("hl", locale),
                ("gl", locale),
                ("api_key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        // SerpAPI reports failures both via HTTP status and an "error" key
        if let Some(err) = body.get("error").and_then(|e| e.as_str()) {
            return Err(SearchError::Api(err.to_string()));
        }
        if !status.is_success() {
            return Err(SearchError::Api(format!("HTTP {}", status.as_u16())));
        }

        let articles = body
            .get("news_results")
            .and_then(|r| r.as_array())
            .map(|arr| {
                arr.iter()
                    .map(|item| NewsArticle {
                        title: item
                            .get("title")
                            .and_then(|t| t.as_str())
                            .unwrap_or("Untitled")
                            .to_string(),
                        // "source" is an object for google_news, a string for
                        // some other engines
                        source: item
                            .get("source")
                            .map(|s| {
                                s.get("name")
                                    .and_then(|n| n.as_str())
                                    .map(str::to_string)
                                    .unwrap_or_else(|| {
                                        s.as_str().unwrap_or("Unknown source").to_string()
                                    })
                            })
                            .unwrap_or_else(|| "Unknown source".to_string()),
                        link: item
                            .get("link")
                            .and_then(|l| l.as_str())
                            .unwrap_or("")
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(articles)
    }
}
