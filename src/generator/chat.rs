// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tutor-style answers to questions about the material being read

use std::sync::Arc;
use tracing::{info, warn};

use super::errors::{GenerationError, MISSING_API_KEY_MESSAGE};
use super::prompts::{chat_prompt, CHAT_PARAMS};
use crate::llm::{ChatModel, CompletionParams};

pub struct ChatResponder {
    model: Arc<dyn ChatModel>,
    params: CompletionParams,
}

impl ChatResponder {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            params: CHAT_PARAMS,
        }
    }

    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Answer `query` using `context` as reference material
    ///
    /// `context` may be empty.
    pub async fn respond(&self, query: &str, context: &str) -> Result<String, GenerationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GenerationError::required("Query"));
        }

        if !self.model.is_configured() {
            return Err(GenerationError::Configuration(
                MISSING_API_KEY_MESSAGE.to_string(),
            ));
        }

        info!(
            "Answering chat query ({} chars, {} chars of context)",
            query.len(),
            context.len()
        );

        let answer = self
            .model
            .complete(&chat_prompt(query, context), self.params)
            .await
            .map_err(|e| {
                warn!("Chat response failed: {}", e);
                GenerationError::from(e)
            })?;

        Ok(answer.trim().to_string())
    }
}
