// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod roadmap;
pub mod tutorials;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// Topic used when none is given
pub const DEFAULT_TOPIC: &str = "Large Language Models";

/// Roadmap Tutor CLI
#[derive(Parser, Debug)]
#[command(name = "roadmap-cli")]
#[command(version)]
#[command(about = "Generate learning roadmaps and tutorial articles offline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the roadmap for a topic
    Roadmap(roadmap::RoadmapArgs),

    /// Write one Markdown tutorial per roadmap entry
    Tutorials(tutorials::TutorialsArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli, config: AppConfig) -> Result<()> {
    match cli.command {
        Commands::Roadmap(args) => roadmap::print_roadmap(args, &config).await,
        Commands::Tutorials(args) => tutorials::generate_tutorials(args, &config).await,
    }
}

/// Trimmed topic, or [`DEFAULT_TOPIC`] when blank
pub fn resolve_topic(topic: Option<&str>) -> String {
    match topic.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => DEFAULT_TOPIC.to_string(),
    }
}
