// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Failure kinds that cross the generator boundary
//!
//! The `Display` text of each variant is the message shown to API callers,
//! so upstream error details never leak through it.

use thiserror::Error;

use crate::llm::ModelError;

pub const MISSING_API_KEY_MESSAGE: &str = "Model API key is not configured";

/// Why a roadmap response could not be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnparseableKind {
    /// Not JSON at all
    InvalidJson,
    /// Valid JSON that is neither a string array nor an `{error}` object
    WrongShape,
}

impl UnparseableKind {
    pub fn message(&self) -> &'static str {
        match self {
            UnparseableKind::InvalidJson => {
                "Failed to parse the AI response. Please try again later."
            }
            UnparseableKind::WrongShape => {
                "Unexpected response format from the AI. Please try again later."
            }
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    /// A required credential is absent; nothing was attempted
    #[error("{0}")]
    Configuration(String),

    /// A required input is missing or blank
    #[error("{0}")]
    Validation(String),

    #[error("The AI service timed out. Please try again later.")]
    UpstreamTimeout,

    #[error("Failed to connect to the AI service. Please try again later.")]
    UpstreamRequestFailure,

    #[error("{}", .0.message())]
    UnparseableModelOutput(UnparseableKind),

    /// The model declined the topic; its message is shown verbatim
    #[error("{0}")]
    ModelReportedRejection(String),

    #[error("An unexpected error occurred. Please try again later.")]
    Unexpected,
}

impl GenerationError {
    /// `"<Label> is required"` for a missing input
    pub fn required(label: &str) -> Self {
        GenerationError::Validation(format!("{} is required", label))
    }

    /// Whether the caller, rather than the system, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GenerationError::Validation(_) | GenerationError::ModelReportedRejection(_)
        )
    }
}

impl From<ModelError> for GenerationError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingApiKey => {
                GenerationError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
            }
            ModelError::Timeout { .. } => GenerationError::UpstreamTimeout,
            ModelError::ApiError { .. } | ModelError::Request(_) => {
                GenerationError::UpstreamRequestFailure
            }
            ModelError::MalformedResponse(_) => GenerationError::Unexpected,
        }
    }
}
