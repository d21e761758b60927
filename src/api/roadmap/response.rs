// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /generate-roadmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapApiResponse {
    /// Section labels in the order the model returned them
    pub roadmap: Vec<String>,
}

impl RoadmapApiResponse {
    pub fn new(roadmap: Vec<String>) -> Self {
        Self { roadmap }
    }
}
