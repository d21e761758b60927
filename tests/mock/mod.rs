// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// tests/mock/mod.rs - Shared test doubles for the model and search seams
#![allow(dead_code)]

use async_trait::async_trait;
use roadmap_tutor::llm::{ChatModel, CompletionParams, ModelError};
use roadmap_tutor::search::{SearchError, SearchProvider, SearchResult, SearchService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Reply = Box<dyn Fn() -> Result<String, ModelError> + Send + Sync>;

/// Model that answers every prompt the same way and records what it saw
pub struct ScriptedModel {
    reply: Reply,
    configured: bool,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    params: Mutex<Vec<CompletionParams>>,
}

impl ScriptedModel {
    fn build(reply: Reply, configured: bool) -> Arc<Self> {
        Arc::new(Self {
            reply,
            configured,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            params: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        let text = text.to_string();
        Self::build(Box::new(move || Ok(text.clone())), true)
    }

    pub fn failing(make: fn() -> ModelError) -> Arc<Self> {
        Self::build(Box::new(move || Err(make())), true)
    }

    /// A model with no API key
    pub fn unconfigured() -> Arc<Self> {
        Self::build(Box::new(|| Err(ModelError::MissingApiKey)), false)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn last_params(&self) -> Option<CompletionParams> {
        self.params.lock().unwrap().last().copied()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(params);
        (self.reply)()
    }

    fn model_id(&self) -> &str {
        "test/scripted-model"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Search provider returning fixed snippets (or failing) and recording queries
pub struct RecordingSearch {
    snippets: Vec<String>,
    fail: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

impl RecordingSearch {
    pub fn with_snippets(snippets: &[&str]) -> (Self, Arc<Mutex<Vec<String>>>) {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let provider = Self {
            snippets: snippets.iter().map(|s| s.to_string()).collect(),
            fail: false,
            queries: queries.clone(),
        };
        (provider, queries)
    }

    pub fn failing() -> (Self, Arc<Mutex<Vec<String>>>) {
        let (mut provider, queries) = Self::with_snippets(&[]);
        provider.fail = true;
        (provider, queries)
    }

    pub fn into_service(self) -> Arc<SearchService> {
        Arc::new(SearchService::with_provider(Box::new(self), 3))
    }
}

#[async_trait]
impl SearchProvider for RecordingSearch {
    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(SearchError::ApiError {
                status: 500,
                message: "backend error".to_string(),
            });
        }
        Ok(self
            .snippets
            .iter()
            .take(num_results)
            .enumerate()
            .map(|(i, snippet)| SearchResult {
                title: format!("Result {}", i + 1),
                url: format!("https://example.com/{}", i + 1),
                snippet: snippet.clone(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "recording"
    }

    fn is_available(&self) -> bool {
        true
    }
}
