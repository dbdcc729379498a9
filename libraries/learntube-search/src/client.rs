//! YouTube Data API client.

use crate::error::{Result, SearchError};
use crate::types::{ErrorResponse, SearchItem, SearchResponse};
use crate::VideoSearch;
use async_trait::async_trait;
use learntube_core::VideoCandidate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Settings for [`YouTubeClient`]
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API key; searches fail with `MissingApiKey` without one
    pub api_key: Option<String>,
    /// API root, overridable for tests
    pub base_url: String,
    /// Results per query (the API allows 0..=50)
    pub max_results: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_results: 10,
        }
    }
}

/// Video search backed by the YouTube Data API v3 `search` endpoint.
///
/// # Example
///
/// ```ignore
/// use learntube_search::{SearchConfig, VideoSearch, YouTubeClient};
///
/// let client = YouTubeClient::new(SearchConfig {
///     api_key: Some("key".into()),
///     ..SearchConfig::default()
/// })?;
/// let videos = client.search("rust ownership").await?;
/// ```
pub struct YouTubeClient {
    http: Client,
    search_url: Url,
    config: SearchConfig,
}

impl YouTubeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self> {
        let search_url = Url::parse(&format!("{}/search", config.base_url.trim_end_matches('/')))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(format!("LearnTube/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            search_url,
            config,
        })
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str) -> Result<Vec<VideoCandidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(SearchError::MissingApiKey)?;

        debug!(query = %query, "Searching YouTube");

        let max_results = self.config.max_results.to_string();
        let response = self
            .http
            .get(self.search_url.clone())
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            warn!(status = status.as_u16(), message = %message, "YouTube search failed");
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        let candidates: Vec<_> = body
            .items
            .into_iter()
            .filter_map(SearchItem::into_candidate)
            .collect();

        debug!(count = candidates.len(), "YouTube search returned");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let result = YouTubeClient::new(SearchConfig {
            base_url: "not a url".to_string(),
            ..SearchConfig::default()
        });
        assert!(matches!(result, Err(SearchError::InvalidUrl(_))));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = YouTubeClient::new(SearchConfig {
            base_url: "https://example.com/youtube/v3/".to_string(),
            ..SearchConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.search_url.as_str(),
            "https://example.com/youtube/v3/search"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_request() {
        let client = YouTubeClient::new(SearchConfig::default()).unwrap();
        let err = client.search("rust").await.unwrap_err();
        assert!(matches!(err, SearchError::MissingApiKey));
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let client = YouTubeClient::new(SearchConfig {
            api_key: Some("key".to_string()),
            ..SearchConfig::default()
        })
        .unwrap();
        let err = client.search("   ").await.unwrap_err();
        assert!(matches!(err, SearchError::EmptyQuery));
    }
}
