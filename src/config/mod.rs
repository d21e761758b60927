// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process-wide configuration
//!
//! Read once at startup from the environment (after `.env` is loaded) and
//! handed to the collaborators that need it. Nothing here changes after
//! startup.

use std::env;
use std::net::SocketAddr;

use crate::outline::OutlineConfig;
use crate::search::SearchConfig;

pub const DEFAULT_MODEL_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL_ID: &str = "meta-llama/llama-4-maverick";
pub const DEFAULT_APP_TITLE: &str = "RoadmapGeneratorApp";

/// Language model endpoint settings
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Bearer credential; `None` disables generation
    pub api_key: Option<String>,
    /// Chat-completions URL
    pub api_url: String,
    /// Model identifier sent with every request
    pub model_id: String,
    /// Value of the `X-Title` attribution header
    pub app_title: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_MODEL_API_URL.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS (credentials are allowed for these)
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}

/// Complete service configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub search: SearchConfig,
    pub outline: OutlineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ServerConfig::default();

        Self {
            server: ServerConfig {
                host: non_empty("HOST").unwrap_or(defaults.host),
                port: non_empty("PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.port),
                cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                    .map(|v| parse_list(&v))
                    .unwrap_or(defaults.cors_allowed_origins),
            },
            model: ModelConfig {
                api_key: non_empty("OPENROUTER_API_KEY").or_else(|| non_empty("OPENAI_API_KEY")),
                api_url: non_empty("OPENROUTER_API_URL")
                    .unwrap_or_else(|| DEFAULT_MODEL_API_URL.to_string()),
                model_id: non_empty("OPENROUTER_MODEL")
                    .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
                app_title: non_empty("OPENROUTER_APP_TITLE")
                    .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
            },
            search: SearchConfig::from_vars(&non_empty),
            outline: OutlineConfig::from_vars(&non_empty),
        }
    }

    /// Validate the configuration
    ///
    /// A missing model key is not an error here: the server still starts
    /// and generation endpoints report it per request. Search settings are
    /// already normalized by [`SearchConfig::from_vars`].
    pub fn validate(&self) -> Result<(), String> {
        self.server.listen_addr()?;
        if self.model.model_id.trim().is_empty() {
            return Err("Model identifier must not be empty".to_string());
        }
        Ok(())
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
