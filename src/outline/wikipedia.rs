// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Wikipedia section outline lookup (MediaWiki `action=parse` API)

use anyhow::Result;
use regex::Regex;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::OutlineConfig;

/// Deepest section level kept in an outline
const MAX_DEPTH: u32 = 3;

/// Sections that are bibliography rather than subject matter
const EXCLUDED_SECTIONS: &[&str] = &[
    "See also",
    "References",
    "External links",
    "Notes",
    "Further reading",
];

#[derive(Debug, serde::Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
}

#[derive(Debug, serde::Deserialize)]
struct ParsedPage {
    #[serde(default)]
    sections: Vec<PageSection>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct PageSection {
    pub toclevel: u32,
    pub line: String,
}

/// Fetches a bullet outline of a topic's Wikipedia page
pub struct WikipediaOutline {
    client: Client,
    config: OutlineConfig,
}

impl WikipediaOutline {
    pub fn new(config: OutlineConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Outline for `topic`, preferring its "Outline of ..." page
    ///
    /// Returns `None` when neither page exists, the outline is empty, or
    /// any request fails.
    pub async fn outline(&self, topic: &str) -> Option<Vec<String>> {
        let title = topic.trim().replace(' ', "_");
        if title.is_empty() {
            return None;
        }

        for page in [format!("Outline_of_{}", title), title] {
            debug!("Checking Wikipedia page: {}", page);
            match self.sections(&page).await {
                Ok(Some(sections)) => {
                    let outline = render_outline(&sections);
                    info!(
                        "Wikipedia page {} gives {} outline entries",
                        page,
                        outline.len()
                    );
                    return if outline.is_empty() {
                        None
                    } else {
                        Some(outline)
                    };
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("Wikipedia lookup for {} failed: {}", page, e);
                    return None;
                }
            }
        }

        debug!("No Wikipedia page found for {}", topic);
        None
    }

    /// Section list of `page`, or `None` if the page does not exist
    async fn sections(&self, page: &str) -> Result<Option<Vec<PageSection>>> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[
                ("action", "parse"),
                ("page", page),
                ("prop", "sections"),
                ("format", "json"),
                ("redirects", "1"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ParseResponse = response.json().await?;
        Ok(body.parse.map(|p| p.sections))
    }
}

/// Render sections as indented `- title` bullets
///
/// Bibliography sections and everything nested under them are dropped, as
/// are sections deeper than level 3 and sections whose title is empty after
/// cleanup.
pub fn render_outline(sections: &[PageSection]) -> Vec<String> {
    let mut outline = Vec::new();
    let mut skip_below: Option<u32> = None;

    for section in sections {
        let level = section.toclevel.max(1);

        if let Some(skipped) = skip_below {
            if level > skipped {
                continue;
            }
            skip_below = None;
        }

        if level > MAX_DEPTH {
            continue;
        }

        let title = clean_title(&section.line);
        if title.is_empty() || EXCLUDED_SECTIONS.iter().any(|x| title.contains(x)) {
            skip_below = Some(level);
            continue;
        }

        outline.push(format!("{}- {}", "  ".repeat((level - 1) as usize), title));
    }

    outline
}

fn clean_title(line: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    static FOOTNOTES: OnceLock<Regex> = OnceLock::new();

    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"));
    let footnotes = FOOTNOTES.get_or_init(|| Regex::new(r"\[\w+\]").expect("valid regex"));

    let without_tags = tags.replace_all(line, "");
    footnotes.replace_all(&without_tags, "").trim().to_string()
}
