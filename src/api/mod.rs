// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod chat;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod json;
pub mod roadmap;

pub use chat::{chat_handler, ChatApiRequest, ChatApiResponse};
pub use content::{content_handler, ContentApiRequest, ContentApiResponse};
pub use errors::{ApiError, ErrorResponse};
pub use handlers::HealthResponse;
pub use http_server::{create_app, start_server, AppState};
pub use json::ApiJson;
pub use roadmap::{roadmap_handler, RoadmapApiRequest, RoadmapApiResponse};
