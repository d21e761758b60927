// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use super::chat::chat_handler;
use super::content::content_handler;
use super::handlers::health_handler;
use super::roadmap::roadmap_handler;
use crate::config::AppConfig;
use crate::generator::{ArticleGenerator, ChatResponder, RoadmapGenerator};
use crate::llm::{ChatModel, OpenRouterClient};
use crate::outline::WikipediaOutline;
use crate::search::SearchService;

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub roadmap: Arc<RoadmapGenerator>,
    pub articles: Arc<ArticleGenerator>,
    pub chat: Arc<ChatResponder>,
    pub model_id: String,
    pub model_configured: bool,
    pub search_enabled: bool,
}

impl AppState {
    /// Build the real collaborators from configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let model: Arc<dyn ChatModel> = Arc::new(OpenRouterClient::new(&config.model)?);
        let search = Arc::new(SearchService::new(&config.search));

        let mut roadmap = RoadmapGenerator::new(model.clone());
        if config.outline.enabled {
            let outline = WikipediaOutline::new(config.outline.clone())?;
            roadmap = roadmap.with_outline(Arc::new(outline));
            info!("Wikipedia outline seeding enabled");
        }

        Ok(Self::with_generators(
            roadmap,
            ArticleGenerator::new(model.clone(), search.clone()),
            ChatResponder::new(model.clone()),
            model.as_ref(),
            &search,
        ))
    }

    /// Build state around arbitrary collaborators
    pub fn from_parts(model: Arc<dyn ChatModel>, search: Arc<SearchService>) -> Self {
        Self::with_generators(
            RoadmapGenerator::new(model.clone()),
            ArticleGenerator::new(model.clone(), search.clone()),
            ChatResponder::new(model.clone()),
            model.as_ref(),
            &search,
        )
    }

    fn with_generators(
        roadmap: RoadmapGenerator,
        articles: ArticleGenerator,
        chat: ChatResponder,
        model: &dyn ChatModel,
        search: &SearchService,
    ) -> Self {
        Self {
            roadmap: Arc::new(roadmap),
            articles: Arc::new(articles),
            chat: Arc::new(chat),
            model_id: model.model_id().to_string(),
            model_configured: model.is_configured(),
            search_enabled: search.is_available(),
        }
    }
}

/// CORS for the configured frontend origins, with credentials
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn create_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/generate-roadmap", post(roadmap_handler))
        .route("/generate-content", post(content_handler))
        .route("/generate-chat-response", post(chat_handler))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(config: AppConfig) -> Result<()> {
    let addr = config
        .server
        .listen_addr()
        .map_err(anyhow::Error::msg)?;
    let state = AppState::from_config(&config)?;

    if !state.model_configured {
        warn!("No model API key configured; generation endpoints will return errors");
    }
    if !state.search_enabled {
        info!("Web search credentials not set; articles are generated without search context");
    }

    let app = create_app(state, &config.server.cors_allowed_origins);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
