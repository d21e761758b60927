// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration, health and CORS tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use roadmap_tutor::{
    api::{create_app, AppState},
    search::SearchService,
};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use super::helpers::{app, get_json};
use crate::mock::{RecordingSearch, ScriptedModel};

#[tokio::test]
async fn test_health_reports_configuration() {
    let (status, body) = get_json(app(ScriptedModel::replying("[]")), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["model"], "test/scripted-model");
    assert_eq!(body["model_configured"], true);
    assert_eq!(body["search_enabled"], false);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_with_search_and_no_key() {
    let (search, _) = RecordingSearch::with_snippets(&[]);
    let state = AppState::from_parts(ScriptedModel::unconfigured(), search.into_service());

    let (status, body) = get_json(create_app(state, &[]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_configured"], false);
    assert_eq!(body["search_enabled"], true);
}

#[tokio::test]
async fn test_generation_routes_reject_get() {
    for uri in ["/generate-roadmap", "/generate-content", "/generate-chat-response"] {
        let (status, _) = get_json(app(ScriptedModel::replying("[]")), uri).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get_json(app(ScriptedModel::replying("[]")), "/v1/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/generate-roadmap")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_allows_configured_origin_with_credentials() {
    let state = AppState::from_parts(
        ScriptedModel::replying("[]"),
        Arc::new(SearchService::disabled()),
    );
    let origins = vec!["http://localhost:3000".to_string()];

    let response = create_app(state, &origins)
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_ignores_other_origins() {
    let state = AppState::from_parts(
        ScriptedModel::replying("[]"),
        Arc::new(SearchService::disabled()),
    );
    let origins = vec!["http://localhost:3000".to_string()];

    let response = create_app(state, &origins)
        .oneshot(preflight("http://evil.example"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
