// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenRouter chat-completion client (OpenAI-compatible API)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::types::{CompletionParams, ModelError};
use crate::config::ModelConfig;

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// A language model that completes a single user prompt
///
/// Generators only see this trait, so tests can swap the HTTP client
/// for a scripted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Send `prompt` as one user message and return the first completion's text
    async fn complete(&self, prompt: &str, params: CompletionParams)
        -> Result<String, ModelError>;

    /// Model identifier used in requests
    fn model_id(&self) -> &str;

    /// Whether a credential is configured
    fn is_configured(&self) -> bool;
}

/// Client for the OpenRouter chat-completions endpoint
pub struct OpenRouterClient {
    client: Client,
    endpoint: String,
    model_id: String,
    api_key: Option<String>,
    app_title: String,
}

impl OpenRouterClient {
    /// Create a new client from the model configuration
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        info!(
            "Model client configured: endpoint={}, model={}, credential={}",
            config.api_url,
            config.model_id,
            if config.api_key.is_some() { "set" } else { "missing" }
        );

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            model_id: config.model_id.clone(),
            api_key: config.api_key.clone(),
            app_title: config.app_title.clone(),
        })
    }
}

#[async_trait]
impl ChatModel for OpenRouterClient {
    async fn complete(
        &self,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, ModelError> {
        let api_key = self.api_key.as_deref().ok_or(ModelError::MissingApiKey)?;
        let start = Instant::now();
        let timeout_ms = params.timeout.as_millis() as u64;

        let request = ChatRequest {
            model: &self.model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header("X-Title", &self.app_title)
            .timeout(params.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout { timeout_ms }
                } else {
                    ModelError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Model endpoint returned {}: {}", status, message);
            return Err(ModelError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ModelError::Timeout { timeout_ms }
            } else {
                ModelError::MalformedResponse(e.to_string())
            }
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ModelError::MalformedResponse("no completion choices".to_string()))?;

        debug!(
            "Model call finished in {}ms ({} chars)",
            start.elapsed().as_millis(),
            content.len()
        );

        Ok(content)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
