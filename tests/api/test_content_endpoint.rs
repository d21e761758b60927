// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /generate-content tests

use axum::http::StatusCode;
use roadmap_tutor::llm::ModelError;
use serde_json::json;

use super::helpers::{app, app_with, post_json};
use crate::mock::{RecordingSearch, ScriptedModel};

const CONTENT_REQUEST: &str = r#"{
    "section": "Spanning Trees",
    "main_topic": "Graph Theory",
    "roadmap": ["1. Introduction", "2. Trees"]
}"#;

#[tokio::test]
async fn test_article_returned() {
    let model = ScriptedModel::replying("# Spanning Trees\n...");

    let (status, body) = post_json(app(model.clone()), "/generate-content", CONTENT_REQUEST).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"content": "# Spanning Trees\n..."}));

    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains(r#"about "Spanning Trees""#));
    assert!(prompt.contains("1. Introduction\n2. Trees"));
    assert!(!prompt.contains("Relevant web search results"));
}

#[tokio::test]
async fn test_missing_fields_make_no_model_call() {
    let cases = [
        (
            r#"{"main_topic": "Graph Theory", "roadmap": []}"#,
            "Section is required",
        ),
        (
            r#"{"section": "Trees", "roadmap": []}"#,
            "Main topic is required",
        ),
        (
            r#"{"section": "Trees", "main_topic": "Graph Theory"}"#,
            "Roadmap is required",
        ),
        (
            r#"{"section": "  ", "main_topic": "Graph Theory", "roadmap": []}"#,
            "Section is required",
        ),
    ];

    for (body, expected) in cases {
        let model = ScriptedModel::replying("# Article");
        let (search, queries) = RecordingSearch::with_snippets(&["snippet"]);
        let (status, response) =
            post_json(app_with(model.clone(), search.into_service()), "/generate-content", body)
                .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, json!({ "error": expected }));
        assert_eq!(model.calls(), 0);
        assert!(queries.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_search_snippets_enrich_prompt() {
    let model = ScriptedModel::replying("# Spanning Trees");
    let (search, queries) = RecordingSearch::with_snippets(&[
        "A spanning tree connects all vertices.",
        "  ",
        "Kruskal's algorithm builds a minimum spanning tree.",
    ]);

    let request = r#"{
        "section": "**Spanning Trees**",
        "main_topic": "Graph Theory",
        "roadmap": ["1. Introduction", "2. Trees"]
    }"#;
    let (status, _) = post_json(
        app_with(model.clone(), search.into_service()),
        "/generate-content",
        request,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        *queries.lock().unwrap(),
        vec!["Spanning Trees Graph Theory guide".to_string()]
    );

    let prompt = model.last_prompt().unwrap();
    assert!(prompt.contains(
        "Relevant web search results:\nA spanning tree connects all vertices.\nKruskal's algorithm builds a minimum spanning tree."
    ));
    assert!(prompt.contains(r#"about "Spanning Trees""#));
}

#[tokio::test]
async fn test_search_can_be_turned_off() {
    let model = ScriptedModel::replying("# Trees");
    let (search, queries) = RecordingSearch::with_snippets(&["snippet"]);

    let request = r#"{
        "section": "Trees",
        "main_topic": "Graph Theory",
        "roadmap": [],
        "search_enabled": false
    }"#;
    let (status, _) = post_json(
        app_with(model.clone(), search.into_service()),
        "/generate-content",
        request,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(queries.lock().unwrap().is_empty());
    assert!(model.last_prompt().unwrap().contains("(no roadmap provided)"));
}

#[tokio::test]
async fn test_search_failure_degrades_gracefully() {
    let model = ScriptedModel::replying("# Spanning Trees\nBody");
    let (search, queries) = RecordingSearch::failing();

    let (status, body) = post_json(
        app_with(model.clone(), search.into_service()),
        "/generate-content",
        CONTENT_REQUEST,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "# Spanning Trees\nBody");
    assert_eq!(queries.lock().unwrap().len(), 1);
    assert!(!model.last_prompt().unwrap().contains("Relevant web search results"));
}

#[tokio::test]
async fn test_article_model_failures() {
    let model = ScriptedModel::failing(|| ModelError::Timeout { timeout_ms: 120000 });
    let (status, body) = post_json(app(model), "/generate-content", CONTENT_REQUEST).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "The AI service timed out. Please try again later.");

    let model = ScriptedModel::failing(|| ModelError::Request("connection refused".to_string()));
    let (status, body) = post_json(app(model), "/generate-content", CONTENT_REQUEST).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Failed to connect to the AI service. Please try again later."
    );

    let model = ScriptedModel::failing(|| ModelError::MalformedResponse("no choices".to_string()));
    let (status, body) = post_json(app(model), "/generate-content", CONTENT_REQUEST).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "An unexpected error occurred. Please try again later."
    );
}
