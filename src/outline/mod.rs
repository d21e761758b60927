// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Optional Wikipedia outline used to seed roadmap generation
//!
//! Off by default. Like web search it is best-effort: any failure simply
//! means the roadmap prompt carries no existing outline.

pub mod wikipedia;

pub use wikipedia::{render_outline, PageSection, WikipediaOutline};

pub const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const WIKIPEDIA_USER_AGENT: &str = "AI_RoadmapGenerator/1.0";

/// Configuration for the Wikipedia outline seed
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    pub enabled: bool,
    pub api_url: String,
    pub user_agent: String,
    pub request_timeout_ms: u64,
}

impl OutlineConfig {
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: lookup("WIKIPEDIA_OUTLINE_ENABLED")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.enabled),
            api_url: lookup("WIKIPEDIA_API_URL").unwrap_or(defaults.api_url),
            ..defaults
        }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: WIKIPEDIA_API_URL.to_string(),
            user_agent: WIKIPEDIA_USER_AGENT.to_string(),
            request_timeout_ms: 10000,
        }
    }
}
