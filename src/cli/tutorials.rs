// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Batch tutorial writing: one Markdown file per roadmap entry

use anyhow::{Context, Result};
use clap::Args;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{error, info, warn};

use super::resolve_topic;
use super::roadmap::build_roadmap;
use crate::config::AppConfig;
use crate::generator::ArticleGenerator;
use crate::llm::OpenRouterClient;
use crate::search::SearchService;

const MAX_FILE_STEM_CHARS: usize = 50;

/// Arguments for the tutorials command
#[derive(Args, Debug)]
pub struct TutorialsArgs {
    /// Topic to build a roadmap for
    pub topic: Option<String>,

    /// Directory for the generated files (default: tutorials_<topic>)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Pause between article requests, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Skip web search enrichment
    #[arg(long)]
    pub no_search: bool,
}

/// Outcome of a tutorials run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TutorialReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// `tutorials_<topic>` with the topic lowercased and spaces replaced
pub fn default_output_dir(topic: &str) -> PathBuf {
    PathBuf::from(format!(
        "tutorials_{}",
        topic.to_lowercase().replace(' ', "_")
    ))
}

/// File name (with `.md`) for a roadmap entry; `None` when nothing usable remains
pub fn tutorial_file_name(item: &str) -> Option<String> {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    let disallowed = DISALLOWED.get_or_init(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

    let stem: String = disallowed
        .replace_all(item, "")
        .trim()
        .replace(' ', "_")
        .chars()
        .take(MAX_FILE_STEM_CHARS)
        .collect();

    if stem.is_empty() {
        None
    } else {
        Some(format!("{}.md", stem))
    }
}

/// Roadmap entry with surrounding whitespace and a leading bullet removed
pub fn clean_item(item: &str) -> &str {
    let trimmed = item.trim();
    trimmed.strip_prefix("- ").unwrap_or(trimmed).trim()
}

/// Generate and write an article for every non-empty roadmap entry
///
/// A failed entry is logged and skipped; only I/O on the output directory
/// aborts the run.
pub async fn write_tutorials(
    articles: &ArticleGenerator,
    main_topic: &str,
    roadmap: &[String],
    output_dir: &Path,
    delay: Duration,
    search_enabled: bool,
) -> Result<TutorialReport> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let items: Vec<&str> = roadmap
        .iter()
        .map(|item| clean_item(item))
        .filter(|item| !item.is_empty())
        .collect();

    let mut report = TutorialReport::default();
    for (index, item) in items.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let file_name = match tutorial_file_name(item) {
            Some(name) => name,
            None => {
                error!("No usable file name for roadmap entry '{}'", item);
                report.failed.push(item.to_string());
                continue;
            }
        };

        info!("Generating tutorial {}/{}: {}", index + 1, items.len(), item);
        match articles
            .generate(main_topic, item, roadmap, search_enabled)
            .await
        {
            Ok(article) => {
                let path = output_dir.join(file_name);
                tokio::fs::write(&path, format!("# {}\n\n{}", item, article))
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Saved tutorial: {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("Failed to generate tutorial for '{}': {}", item, e);
                report.failed.push(item.to_string());
            }
        }
    }

    Ok(report)
}

pub async fn generate_tutorials(args: TutorialsArgs, config: &AppConfig) -> Result<()> {
    let topic = resolve_topic(args.topic.as_deref());
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&topic));

    let roadmap = build_roadmap(config, &topic).await?;
    println!("Roadmap for {} ({} entries)", topic, roadmap.len());

    if roadmap.is_empty() {
        warn!("Skipping tutorial generation: the roadmap is empty");
        return Ok(());
    }
    if config.model.api_key.is_none() {
        warn!("Skipping tutorial generation: no model API key configured");
        for item in &roadmap {
            println!("{}", item);
        }
        return Ok(());
    }

    let model = Arc::new(OpenRouterClient::new(&config.model)?);
    let search = Arc::new(SearchService::new(&config.search));
    let articles = ArticleGenerator::new(model, search);

    let report = write_tutorials(
        &articles,
        &topic,
        &roadmap,
        &output_dir,
        Duration::from_millis(args.delay_ms),
        !args.no_search,
    )
    .await?;

    println!(
        "Wrote {} tutorial(s) to {}",
        report.written.len(),
        output_dir.display()
    );
    if !report.failed.is_empty() {
        println!("Skipped {} entr(ies) after errors", report.failed.len());
    }
    Ok(())
}
