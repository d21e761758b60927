// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Roadmap, article and chat generation
//!
//! Each generator builds one prompt, makes one model call and converts
//! every failure into a [`GenerationError`] before returning.

pub mod article;
pub mod chat;
pub mod errors;
pub mod prompts;
pub mod roadmap;

pub use article::{clean_section, search_query, ArticleGenerator};
pub use chat::ChatResponder;
pub use errors::{GenerationError, UnparseableKind};
pub use roadmap::{parse_roadmap_output, RoadmapGenerator, RoadmapOutput};
