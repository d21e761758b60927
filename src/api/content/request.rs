// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /generate-content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentApiRequest {
    /// Roadmap entry to write about (required)
    #[serde(default)]
    pub section: Option<String>,

    /// Topic the roadmap was generated for (required)
    #[serde(default)]
    pub main_topic: Option<String>,

    /// Full roadmap, used as context only (required, may be empty)
    #[serde(default)]
    pub roadmap: Option<Vec<String>>,

    /// Enrich the article with web search snippets (default true)
    #[serde(default = "default_search_enabled")]
    pub search_enabled: bool,
}

fn default_search_enabled() -> bool {
    true
}

impl ContentApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if is_blank(&self.section) {
            return Err("Section is required".to_string());
        }
        if is_blank(&self.main_topic) {
            return Err("Main topic is required".to_string());
        }
        if self.roadmap.is_none() {
            return Err("Roadmap is required".to_string());
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
