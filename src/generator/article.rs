// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Long-form article generation for one roadmap section

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::{GenerationError, MISSING_API_KEY_MESSAGE};
use super::prompts::{article_prompt, search_context, ARTICLE_PARAMS};
use crate::llm::{ChatModel, CompletionParams};
use crate::search::SearchService;

/// Strip list bullets, heading hashes and emphasis markers from a label
///
/// Numbering such as `2.1` is kept; it is part of how the roadmap reads.
pub fn clean_section(section: &str) -> String {
    let trimmed = section.trim();
    let without_bullet = trimmed.strip_prefix("- ").unwrap_or(trimmed);
    without_bullet
        .trim_start_matches('#')
        .replace('*', "")
        .trim()
        .to_string()
}

/// Query sent to web search for a section
pub fn search_query(section: &str, main_topic: &str) -> String {
    format!("{} {} guide", section, main_topic)
}

/// Produces Markdown articles, optionally enriched with search snippets
pub struct ArticleGenerator {
    model: Arc<dyn ChatModel>,
    search: Arc<SearchService>,
    params: CompletionParams,
}

impl ArticleGenerator {
    pub fn new(model: Arc<dyn ChatModel>, search: Arc<SearchService>) -> Self {
        Self {
            model,
            search,
            params: ARTICLE_PARAMS,
        }
    }

    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Generate the article for `section` of the `main_topic` roadmap
    ///
    /// The roadmap is only context for the model. When `search_enabled` is
    /// set and search is configured, snippets for
    /// `"{section} {main_topic} guide"` are added to the prompt; search
    /// problems never fail the call.
    pub async fn generate(
        &self,
        main_topic: &str,
        section: &str,
        roadmap: &[String],
        search_enabled: bool,
    ) -> Result<String, GenerationError> {
        let section = clean_section(section);
        if section.is_empty() {
            return Err(GenerationError::required("Section"));
        }
        let main_topic = main_topic.trim();
        if main_topic.is_empty() {
            return Err(GenerationError::required("Main topic"));
        }

        if !self.model.is_configured() {
            warn!("Article requested but no model API key is configured");
            return Err(GenerationError::Configuration(
                MISSING_API_KEY_MESSAGE.to_string(),
            ));
        }

        info!("Generating article for: {} (under {})", section, main_topic);

        let context = if search_enabled && self.search.is_available() {
            let query = search_query(&section, main_topic);
            debug!("Performing web search for: {}", query);
            let snippets = self.search.snippets(&query, None).await;
            info!("Found {} relevant snippets", snippets.len());
            search_context(&snippets)
        } else {
            String::new()
        };

        let prompt = article_prompt(main_topic, &section, roadmap, &context);
        let article = self
            .model
            .complete(&prompt, self.params)
            .await
            .map_err(|e| {
                warn!("Article generation for '{}' failed: {}", section, e);
                GenerationError::from(e)
            })?;

        let article = article.trim().to_string();
        info!("Generated article for '{}' ({} chars)", section, article.len());
        Ok(article)
    }
}
