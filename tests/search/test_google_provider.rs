// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Google Custom Search provider tests against a mock endpoint

use roadmap_tutor::search::{GoogleSearchProvider, SearchError, SearchProvider};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> GoogleSearchProvider {
    GoogleSearchProvider::new("g-key".to_string(), "cx-id".to_string())
        .unwrap()
        .with_endpoint(&format!("{}/customsearch/v1", server.uri()))
}

#[tokio::test]
async fn test_search_parses_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "g-key"))
        .and(query_param("cx", "cx-id"))
        .and(query_param("q", "Spanning Trees Graph Theory guide"))
        .and(query_param("num", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"title": "Spanning tree", "link": "https://en.wikipedia.org/wiki/Spanning_tree", "snippet": "A spanning tree of a graph..."},
                {"title": "MST", "link": "https://example.com/mst"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = provider_for(&server)
        .search("Spanning Trees Graph Theory guide", 3)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].url, "https://en.wikipedia.org/wiki/Spanning_tree");
    assert_eq!(results[0].snippet, "A spanning tree of a graph...");
    assert_eq!(results[1].snippet, "");
}

#[tokio::test]
async fn test_result_count_is_clamped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("num", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let results = provider_for(&server).search("rust", 50).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_no_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"searchInformation": {"totalResults": "0"}})),
        )
        .mount(&server)
        .await;

    let results = provider_for(&server).search("qwzxv", 3).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (429u16, "rate"),
        (403, "key"),
        (500, "api"),
    ];

    for (status, kind) in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
            .mount(&server)
            .await;

        let err = provider_for(&server).search("rust", 3).await.unwrap_err();
        match (kind, err) {
            ("rate", SearchError::RateLimited { .. }) => {}
            ("key", SearchError::NoApiKey { .. }) => {}
            ("api", SearchError::ApiError { status: 500, .. }) => {}
            (kind, other) => panic!("status {} ({}): unexpected {:?}", status, kind, other),
        }
    }
}

#[tokio::test]
async fn test_slow_search_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .with_timeout_ms(200)
        .search("rust", 3)
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Timeout { timeout_ms: 200 }));
}

#[tokio::test]
async fn test_empty_query_is_rejected_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider_for(&server).search("   ", 3).await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidQuery { .. }));
}
