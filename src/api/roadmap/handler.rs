// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roadmap API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::RoadmapApiRequest;
use super::response::RoadmapApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::json::ApiJson;

/// POST /generate-roadmap - Generate a learning roadmap for a topic
///
/// # Request
/// - `topic`: Subject to cover (required, non-blank)
///
/// # Response
/// - `roadmap`: Array of numbered section labels; subsections are indented
///
/// # Errors
/// - 400 Bad Request: Missing topic, malformed body, or the model declined the topic
/// - 500 Internal Server Error: Missing API key, model timeout or failure, unreadable model output
pub async fn roadmap_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RoadmapApiRequest>,
) -> Result<Json<RoadmapApiResponse>, ApiError> {
    debug!("Roadmap request: {:?}", request.topic);

    if let Err(e) = request.validate() {
        warn!("Roadmap validation failed: {}", e);
        return Err(ApiError::ValidationError(e));
    }

    let roadmap = state.roadmap.generate(request.topic()).await?;

    Ok(Json(RoadmapApiResponse::new(roadmap)))
}
