// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API request types

use serde::{Deserialize, Serialize};

/// Request body for POST /generate-chat-response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatApiRequest {
    /// Reader's question (required, non-blank)
    #[serde(default)]
    pub query: Option<String>,

    /// Material the question is about (required, may be empty)
    #[serde(default)]
    pub context: Option<String>,
}

impl ChatApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.query.as_deref().map_or(true, |q| q.trim().is_empty()) {
            return Err("Query is required".to_string());
        }
        if self.context.is_none() {
            return Err("Context is required".to_string());
        }
        Ok(())
    }
}
