// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{bail, Result};
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

use super::resolve_topic;
use super::tutorials::clean_item;
use crate::config::AppConfig;
use crate::generator::errors::MISSING_API_KEY_MESSAGE;
use crate::generator::RoadmapGenerator;
use crate::llm::OpenRouterClient;
use crate::outline::WikipediaOutline;

/// Entry that introduces model-suggested topics after a Wikipedia outline
pub const ENHANCED_TOPICS_HEADING: &str = "- Modern & Advanced Topics (LLM-Enhanced)";

/// Arguments for the roadmap command
#[derive(Args, Debug)]
pub struct RoadmapArgs {
    /// Topic to build a roadmap for
    pub topic: Option<String>,
}

/// Append model entries to an outline under [`ENHANCED_TOPICS_HEADING`]
///
/// Entries whose text already appears in the outline are dropped. With no
/// outline the model entries are returned unchanged.
pub fn merge_roadmaps(outline: Vec<String>, enhancements: Vec<String>) -> Vec<String> {
    if outline.is_empty() {
        return enhancements;
    }

    let mut merged = outline;
    let additions: Vec<String> = enhancements
        .iter()
        .map(|item| clean_item(item))
        .filter(|item| !item.is_empty())
        .filter(|item| !merged.iter().any(|existing| clean_item(existing) == *item))
        .map(|item| format!("  - {}", item))
        .collect();

    if !additions.is_empty() {
        merged.push(ENHANCED_TOPICS_HEADING.to_string());
        merged.extend(additions);
    }
    merged
}

/// Roadmap for the CLI, combining the Wikipedia outline and the model
///
/// Without a model key the outline is used on its own; only when neither
/// source is available does this fail. A failed model call also falls back
/// to the outline when one was found.
pub async fn build_roadmap(config: &AppConfig, topic: &str) -> Result<Vec<String>> {
    let outline = if config.outline.enabled {
        WikipediaOutline::new(config.outline.clone())?
            .outline(topic)
            .await
    } else {
        None
    };

    if config.model.api_key.is_none() {
        return match outline {
            Some(items) => {
                warn!("No model API key configured, using the Wikipedia outline only");
                Ok(items)
            }
            None => bail!(MISSING_API_KEY_MESSAGE),
        };
    }

    let model = Arc::new(OpenRouterClient::new(&config.model)?);
    let generator = RoadmapGenerator::new(model);

    let generated = generator.generate_seeded(topic, outline.as_deref()).await;
    match (generated, outline) {
        (Ok(items), Some(outline)) => {
            info!(
                "Merging {} model entries into a {}-entry outline",
                items.len(),
                outline.len()
            );
            Ok(merge_roadmaps(outline, items))
        }
        (Ok(items), None) => Ok(items),
        (Err(e), Some(outline)) => {
            warn!("Model roadmap failed ({}), using the Wikipedia outline", e);
            Ok(outline)
        }
        (Err(e), None) => Err(e.into()),
    }
}

pub async fn print_roadmap(args: RoadmapArgs, config: &AppConfig) -> Result<()> {
    let topic = resolve_topic(args.topic.as_deref());

    let roadmap = build_roadmap(config, &topic).await?;

    println!("Roadmap for {}:", topic);
    for item in &roadmap {
        println!("{}", item);
    }
    Ok(())
}
