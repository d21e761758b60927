// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /generate-content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentApiResponse {
    /// Markdown article
    pub content: String,
}

impl ContentApiResponse {
    pub fn new(content: String) -> Self {
        Self { content }
    }
}
