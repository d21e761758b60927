// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roadmap generation and model-output interpretation

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::{GenerationError, UnparseableKind, MISSING_API_KEY_MESSAGE};
use super::prompts::{roadmap_prompt, ROADMAP_PARAMS};
use crate::llm::{ChatModel, CompletionParams};
use crate::outline::WikipediaOutline;

/// How the model's roadmap answer was interpreted
#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapOutput {
    /// A JSON array of strings, kept exactly as returned
    ParsedList(Vec<String>),
    /// A JSON object with an `error` key
    ReportedError(String),
    /// Anything else
    Unparseable(UnparseableKind),
}

impl RoadmapOutput {
    pub fn into_result(self) -> Result<Vec<String>, GenerationError> {
        match self {
            RoadmapOutput::ParsedList(items) => Ok(items),
            RoadmapOutput::ReportedError(message) => {
                Err(GenerationError::ModelReportedRejection(message))
            }
            RoadmapOutput::Unparseable(kind) => Err(GenerationError::UnparseableModelOutput(kind)),
        }
    }
}

/// Strictly parse raw model text as a roadmap answer
///
/// Surrounding whitespace is ignored; nothing else is repaired. An array
/// containing any non-string element is the wrong shape. A non-string
/// `error` value is reported as its JSON text.
pub fn parse_roadmap_output(raw: &str) -> RoadmapOutput {
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(_) => return RoadmapOutput::Unparseable(UnparseableKind::InvalidJson),
    };

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(label) => Some(label),
                _ => None,
            })
            .collect::<Option<Vec<String>>>()
            .map(RoadmapOutput::ParsedList)
            .unwrap_or(RoadmapOutput::Unparseable(UnparseableKind::WrongShape)),
        Value::Object(mut map) => match map.remove("error") {
            Some(Value::String(message)) => RoadmapOutput::ReportedError(message),
            Some(other) => RoadmapOutput::ReportedError(other.to_string()),
            None => RoadmapOutput::Unparseable(UnparseableKind::WrongShape),
        },
        _ => RoadmapOutput::Unparseable(UnparseableKind::WrongShape),
    }
}

/// Turns a topic into an ordered list of hierarchical section labels
pub struct RoadmapGenerator {
    model: Arc<dyn ChatModel>,
    outline: Option<Arc<WikipediaOutline>>,
    params: CompletionParams,
}

impl RoadmapGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            model,
            outline: None,
            params: ROADMAP_PARAMS,
        }
    }

    /// Seed prompts with a Wikipedia outline of the topic
    pub fn with_outline(mut self, outline: Arc<WikipediaOutline>) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Generate a roadmap for `topic`
    ///
    /// Makes exactly one model call (plus the optional outline lookup); no
    /// retries.
    pub async fn generate(&self, topic: &str) -> Result<Vec<String>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::required("Topic"));
        }

        let existing = match &self.outline {
            Some(outline) if self.model.is_configured() => outline.outline(topic).await,
            _ => None,
        };

        self.generate_seeded(topic, existing.as_deref()).await
    }

    /// Generate a roadmap for `topic` that builds on an already fetched outline
    pub async fn generate_seeded(
        &self,
        topic: &str,
        existing: Option<&[String]>,
    ) -> Result<Vec<String>, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::required("Topic"));
        }

        if !self.model.is_configured() {
            warn!("Roadmap requested but no model API key is configured");
            return Err(GenerationError::Configuration(
                MISSING_API_KEY_MESSAGE.to_string(),
            ));
        }

        info!("Generating roadmap for topic: {}", topic);

        let prompt = roadmap_prompt(topic, existing);
        let raw = self
            .model
            .complete(&prompt, self.params)
            .await
            .map_err(|e| {
                warn!("Roadmap model call failed for '{}': {}", topic, e);
                GenerationError::from(e)
            })?;

        debug!("Raw roadmap response: {}", raw);

        parse_roadmap_output(&raw)
            .into_result()
            .map(|items| {
                info!("Generated roadmap with {} entries", items.len());
                items
            })
            .map_err(|e| {
                warn!("Roadmap for '{}' not usable: {}", topic, e);
                e
            })
    }
}
