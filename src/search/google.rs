// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Programmable Search (Custom Search JSON API) provider

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::config::{SearchConfig, MAX_NUM_RESULTS};
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

/// Google Custom Search provider
pub struct GoogleSearchProvider {
    api_key: String,
    engine_id: String,
    endpoint: String,
    timeout_ms: u64,
    client: Client,
}

impl GoogleSearchProvider {
    /// Create a new Google Custom Search provider
    ///
    /// # Arguments
    /// * `api_key` - Google API key
    /// * `engine_id` - Programmable search engine id (`cx`)
    pub fn new(api_key: String, engine_id: String) -> Result<Self> {
        let defaults = SearchConfig::default();
        Ok(Self {
            api_key,
            engine_id,
            endpoint: defaults.api_url,
            timeout_ms: defaults.request_timeout_ms,
            client: Client::builder().build()?,
        })
    }

    /// Build a provider from configuration, if both credentials are present
    pub fn from_config(config: &SearchConfig) -> Result<Option<Self>> {
        match (&config.google_api_key, &config.google_cse_id) {
            (Some(key), Some(cx)) => Ok(Some(
                Self::new(key.clone(), cx.clone())?
                    .with_endpoint(&config.api_url)
                    .with_timeout_ms(config.request_timeout_ms),
            )),
            _ => Ok(None),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                reason: "empty query".to_string(),
            });
        }

        let timeout_ms = self.timeout_ms;
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(Duration::from_millis(timeout_ms))
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", query),
                ("num", &num_results.clamp(1, MAX_NUM_RESULTS).to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout { timeout_ms }
                } else {
                    SearchError::ApiError {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if status == 429 {
            return Err(SearchError::RateLimited {
                provider: "google".to_string(),
            });
        }

        if status == 401 || status == 403 {
            return Err(SearchError::NoApiKey {
                provider: "google".to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let data: GoogleResponse = response.json().await.map_err(|e| SearchError::ApiError {
            status: 0,
            message: format!("JSON parse error: {}", e),
        })?;

        Ok(data
            .items
            .into_iter()
            .map(|item| SearchResult {
                title: item.title,
                url: item.link,
                snippet: item.snippet,
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "google"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty() && !self.engine_id.is_empty()
    }
}

#[derive(Debug, serde::Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<GoogleItem>,
}

#[derive(Debug, serde::Deserialize)]
struct GoogleItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}
