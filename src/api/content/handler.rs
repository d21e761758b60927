// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Article API endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, warn};

use super::request::ContentApiRequest;
use super::response::ContentApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::json::ApiJson;

/// POST /generate-content - Write the article for one roadmap section
///
/// # Request
/// - `section`: Roadmap entry to cover (required)
/// - `main_topic`: Topic of the roadmap (required)
/// - `roadmap`: Full roadmap for context (required, may be empty)
/// - `search_enabled`: Add web search snippets when configured (default true)
///
/// # Response
/// - `content`: Markdown article
///
/// # Errors
/// - 400 Bad Request: Missing fields or malformed body
/// - 500 Internal Server Error: Missing API key, model timeout or failure
pub async fn content_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContentApiRequest>,
) -> Result<Json<ContentApiResponse>, ApiError> {
    debug!(
        "Content request: section={:?} main_topic={:?}",
        request.section, request.main_topic
    );

    if let Err(e) = request.validate() {
        warn!("Content validation failed: {}", e);
        return Err(ApiError::ValidationError(e));
    }

    let ContentApiRequest {
        section,
        main_topic,
        roadmap,
        search_enabled,
    } = request;

    let content = state
        .articles
        .generate(
            main_topic.as_deref().unwrap_or_default(),
            section.as_deref().unwrap_or_default(),
            roadmap.as_deref().unwrap_or_default(),
            search_enabled,
        )
        .await?;

    Ok(Json(ContentApiResponse::new(content)))
}
