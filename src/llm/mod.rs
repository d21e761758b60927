// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared model-call utility
//!
//! One operation: send a prompt as a single chat message and return the
//! first completion's text. No retries, no caching.

pub mod client;
pub mod types;

pub use client::{ChatModel, OpenRouterClient};
pub use types::{CompletionParams, ModelError};
