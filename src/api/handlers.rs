// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::http_server::AppState;
use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Model identifier requests are sent to
    pub model: String,
    /// Whether a model API key is present
    pub model_configured: bool,
    /// Whether web search credentials are present
    pub search_enabled: bool,
}

/// GET /health - Liveness and configuration summary
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        model: state.model_id.clone(),
        model_configured: state.model_configured,
        search_enabled: state.search_enabled,
    })
}
