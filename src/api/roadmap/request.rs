// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roadmap API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /generate-roadmap
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapApiRequest {
    /// Subject to build a roadmap for (required)
    #[serde(default)]
    pub topic: Option<String>,
}

impl RoadmapApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        match self.topic.as_deref() {
            Some(topic) if !topic.trim().is_empty() => Ok(()),
            _ => Err("Topic is required".to_string()),
        }
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or_default()
    }
}
