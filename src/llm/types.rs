// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for chat-completion calls

use std::time::Duration;
use thiserror::Error;

/// Per-call generation budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    /// Upper bound on completion length
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Deadline for the whole HTTP exchange
    pub timeout: Duration,
}

impl CompletionParams {
    pub const fn new(max_tokens: u32, temperature: f32, timeout: Duration) -> Self {
        Self {
            max_tokens,
            temperature,
            timeout,
        }
    }

    /// Same budget with a different deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Errors that can occur while calling the language model
#[derive(Debug, Error)]
pub enum ModelError {
    /// No bearer credential configured; the call is never attempted
    #[error("Model API key not configured")]
    MissingApiKey,

    /// Request exceeded its deadline
    #[error("Model request timed out after {timeout_ms}ms")]
    Timeout {
        /// Deadline in milliseconds
        timeout_ms: u64,
    },

    /// Non-success HTTP status from the model endpoint
    #[error("Model API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Connection-level failure
    #[error("Model request failed: {0}")]
    Request(String),

    /// 2xx response without a usable completion
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}
