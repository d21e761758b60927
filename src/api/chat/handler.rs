// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Chat API endpoint handler

use axum::{extract::State, Json};
use tracing::warn;

use super::request::ChatApiRequest;
use super::response::ChatApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::json::ApiJson;

/// POST /generate-chat-response - Answer a question about the open material
///
/// # Request
/// - `query`: Question (required)
/// - `context`: Reference text, usually the article being read (required, may be empty)
///
/// # Response
/// - `response`: Markdown answer
///
/// # Errors
/// - 400 Bad Request: Missing fields or malformed body
/// - 500 Internal Server Error: Missing API key, model timeout or failure
pub async fn chat_handler(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChatApiRequest>,
) -> Result<Json<ChatApiResponse>, ApiError> {
    if let Err(e) = request.validate() {
        warn!("Chat validation failed: {}", e);
        return Err(ApiError::ValidationError(e));
    }

    let answer = state
        .chat
        .respond(
            request.query.as_deref().unwrap_or_default(),
            request.context.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(ChatApiResponse::new(answer)))
}
