// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use roadmap_tutor::{api::start_server, config::AppConfig, version};
use std::env;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    info!(
        "Model: {} via {}",
        config.model.model_id, config.model.api_url
    );

    start_server(config).await
}
