// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search enrichment
//!
//! Supplies short snippets that freshen generated articles. Search is
//! strictly best-effort:
//! - Missing credentials disable it silently
//! - Provider failures degrade to "no snippets"

pub mod config;
pub mod google;
pub mod provider;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::SearchConfig;
pub use google::GoogleSearchProvider;
pub use provider::SearchProvider;
pub use service::SearchService;
pub use types::{SearchError, SearchResult};
