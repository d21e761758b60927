// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod generator;
pub mod llm;
pub mod outline;
pub mod search;
pub mod version;

pub use api::{create_app, AppState};
pub use config::AppConfig;
pub use generator::{ArticleGenerator, ChatResponder, GenerationError, RoadmapGenerator};
pub use llm::{ChatModel, OpenRouterClient};
pub use search::SearchService;
