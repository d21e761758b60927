// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /generate-chat-response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatApiResponse {
    pub response: String,
}

impl ChatApiResponse {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}
