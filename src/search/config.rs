// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search enrichment

use tracing::warn;

pub const GOOGLE_CSE_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Custom Search allows at most 10 results per request
pub const MAX_NUM_RESULTS: usize = 10;

/// Configuration for web search enrichment
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Google API key
    pub google_api_key: Option<String>,
    /// Programmable search engine identifier (`cx`)
    pub google_cse_id: Option<String>,
    /// Custom Search endpoint
    pub api_url: String,
    /// Default number of snippets per query
    pub num_results: usize,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl SearchConfig {
    /// Load configuration through an arbitrary variable lookup
    ///
    /// Search is best-effort, so unusable values are logged and replaced by
    /// their defaults instead of failing startup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            google_api_key: lookup("GOOGLE_API_KEY"),
            google_cse_id: lookup("GOOGLE_CSE_ID"),
            api_url: lookup("GOOGLE_CSE_URL").unwrap_or(defaults.api_url),
            num_results: match lookup("SEARCH_NUM_RESULTS").map(|v| v.parse::<usize>()) {
                Some(Ok(n)) => n.clamp(1, MAX_NUM_RESULTS),
                Some(Err(_)) => {
                    warn!(
                        "Ignoring invalid SEARCH_NUM_RESULTS, using {}",
                        defaults.num_results
                    );
                    defaults.num_results
                }
                None => defaults.num_results,
            },
            request_timeout_ms: match lookup("SEARCH_TIMEOUT_MS").map(|v| v.parse::<u64>()) {
                Some(Ok(ms)) if ms > 0 => ms,
                Some(_) => {
                    warn!(
                        "Ignoring invalid SEARCH_TIMEOUT_MS, using {} ms",
                        defaults.request_timeout_ms
                    );
                    defaults.request_timeout_ms
                }
                None => defaults.request_timeout_ms,
            },
        }
    }

    /// Both the API key and the engine id are needed to search
    pub fn is_available(&self) -> bool {
        self.google_api_key.is_some() && self.google_cse_id.is_some()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            google_cse_id: None,
            api_url: GOOGLE_CSE_URL.to_string(),
            num_results: 3,
            request_timeout_ms: 10000,
        }
    }
}
