// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Best-effort snippet lookup
//!
//! Wraps the configured provider so callers only ever see a (possibly
//! empty) list of snippets. Missing credentials and every provider failure
//! collapse into "no results".

use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use super::google::GoogleSearchProvider;
use super::provider::SearchProvider;

/// Search service used for article enrichment
pub struct SearchService {
    provider: Option<Box<dyn SearchProvider>>,
    default_num_results: usize,
}

impl SearchService {
    /// Create a new search service from configuration
    pub fn new(config: &SearchConfig) -> Self {
        let provider: Option<Box<dyn SearchProvider>> =
            match GoogleSearchProvider::from_config(config) {
                Ok(Some(provider)) => {
                    debug!("Google Search provider enabled");
                    Some(Box::new(provider))
                }
                Ok(None) => {
                    info!("Google Search credentials not set, web search enrichment disabled");
                    None
                }
                Err(e) => {
                    warn!("Failed to create Google Search provider: {}", e);
                    None
                }
            };

        Self {
            provider,
            default_num_results: config.num_results,
        }
    }

    /// Service backed by an explicit provider
    pub fn with_provider(provider: Box<dyn SearchProvider>, default_num_results: usize) -> Self {
        Self {
            provider: Some(provider),
            default_num_results,
        }
    }

    /// Service with no provider; every lookup returns nothing
    pub fn disabled() -> Self {
        Self {
            provider: None,
            default_num_results: SearchConfig::default().num_results,
        }
    }

    /// Whether a usable provider is configured
    pub fn is_available(&self) -> bool {
        self.provider.as_ref().is_some_and(|p| p.is_available())
    }

    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.name())
    }

    pub fn default_num_results(&self) -> usize {
        self.default_num_results
    }

    /// Look up short text snippets for `query`
    ///
    /// Never fails: returns an empty list when search is unavailable or
    /// the provider errors. Empty snippets are dropped.
    pub async fn snippets(&self, query: &str, max_results: Option<usize>) -> Vec<String> {
        let provider = match &self.provider {
            Some(provider) if provider.is_available() => provider,
            _ => {
                debug!("Search unavailable, skipping web search");
                return Vec::new();
            }
        };

        let num_results = max_results.unwrap_or(self.default_num_results);
        let start = Instant::now();

        match provider.search(query, num_results).await {
            Ok(results) => {
                let snippets: Vec<String> = results
                    .into_iter()
                    .map(|r| r.snippet.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .take(num_results)
                    .collect();

                info!(
                    "Search complete: {} snippets from {} in {}ms",
                    snippets.len(),
                    provider.name(),
                    start.elapsed().as_millis()
                );
                snippets
            }
            Err(e) => {
                warn!("Search provider {} failed: {}", provider.name(), e);
                Vec::new()
            }
        }
    }
}
