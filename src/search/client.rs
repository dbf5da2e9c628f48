// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the image search API.
//!
//! This is the application's only network boundary. It covers two concerns:
//! the paged JSON search call, and raw image-byte fetches for thumbnails and
//! previews (a desktop app has no `<img>` element doing that for it).
//! Fetched bytes are validated through the `image` crate before iced ever
//! sees them, so a broken payload surfaces as an error rather than a blank
//! widget.

use super::types::SearchPage;
use crate::config::SearchConfig;
use crate::error::SearchError;
use iced::widget::image::Handle;
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Hard ceiling per request; a search session has no retry machinery, so a
/// hung request must fail rather than hold the loading state forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Client for a Pixabay-compatible search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    per_page: u32,
}

impl SearchClient {
    /// Builds a client from the `[search]` config section.
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        // Explicit redirect policy and user agent; CDN image URLs redirect.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to initialize HTTP client.");

        Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.resolved_api_key(),
            per_page: config.per_page,
        }
    }

    /// Number of hits requested per page.
    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Builds the search URL for a query and 1-based page.
    ///
    /// # Errors
    ///
    /// Fails when no API key is available or the endpoint is not a URL.
    pub fn search_url(&self, query: &str, page: u32) -> Result<reqwest::Url, SearchError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(SearchError::MissingApiKey)?;

        let mut url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| SearchError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        url.query_pairs_mut()
            .append_pair("key", key)
            .append_pair("q", query)
            .append_pair("image_type", "photo")
            .append_pair("orientation", "horizontal")
            .append_pair("safesearch", "true")
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &self.per_page.to_string());

        Ok(url)
    }

    /// Fetches one page of hits for a query.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decode failure; callers treat all of them
    /// as fatal to the session.
    pub async fn search(&self, query: String, page: u32) -> Result<SearchPage, SearchError> {
        let url = self.search_url(&query, page)?;

        log::debug!("searching page {page} for {query:?}");

        let response = self.http.get(url).send().await.map_err(SearchError::from)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let page: SearchPage = response
            .json()
            .await
            .map_err(|e| SearchError::MalformedBody(e.to_string()))?;

        log::debug!(
            "received {} hits ({} total) for {query:?}",
            page.hits.len(),
            page.total_hits
        );
        Ok(page)
    }

    /// Fetches and decodes a single image (thumbnail or full-size preview).
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or bytes that do not
    /// decode as an image.
    pub async fn fetch_image(&self, url: String) -> Result<Handle, SearchError> {
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(SearchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(SearchError::from)?;

        image_rs::load_from_memory(&bytes)
            .map_err(|e| SearchError::BadImageData(e.to_string()))?;

        Ok(Handle::from_bytes(bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;

    fn client_with_key() -> SearchClient {
        let config = SearchConfig {
            api_key: Some("test-key".to_string()),
            ..SearchConfig::default()
        };
        SearchClient::from_config(&config)
    }

    #[test]
    fn search_url_carries_query_and_paging() {
        let client = client_with_key();
        let url = client.search_url("yellow flowers", 3).expect("url");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(pairs.contains(&("key".to_string(), "test-key".to_string())));
        assert!(pairs.contains(&("q".to_string(), "yellow flowers".to_string())));
        assert!(pairs.contains(&("page".to_string(), "3".to_string())));
        assert!(pairs.contains(&("per_page".to_string(), "12".to_string())));
        assert!(pairs.contains(&("safesearch".to_string(), "true".to_string())));
    }

    #[test]
    fn search_url_without_key_fails() {
        let config = SearchConfig::default();
        // Force-clear any ambient environment key for a deterministic result.
        let client = SearchClient {
            api_key: None,
            ..SearchClient::from_config(&config)
        };
        assert!(matches!(
            client.search_url("cats", 1),
            Err(SearchError::MissingApiKey)
        ));
    }

    #[test]
    fn search_url_rejects_bad_endpoint() {
        let config = SearchConfig {
            api_key: Some("k".to_string()),
            endpoint: "not a url".to_string(),
            ..SearchConfig::default()
        };
        let client = SearchClient::from_config(&config);
        assert!(matches!(
            client.search_url("cats", 1),
            Err(SearchError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn query_is_percent_encoded() {
        let client = client_with_key();
        let url = client.search_url("caffè & crema", 1).expect("url");
        let q = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.to_string());
        assert_eq!(q.as_deref(), Some("caffè & crema"));
    }
}
