//! Shared fixtures for tests that talk to a mock GitHub API

#![allow(dead_code)]

use ghfetch::github::{GitHubClient, OAuthToken};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at `server` with the given token and page size
pub fn client_for(server: &MockServer, token: &str, per_page: u32) -> GitHubClient {
    GitHubClient::new(OAuthToken::new(token))
        .expect("client should build")
        .with_base_uri(server.uri())
        .with_per_page(per_page)
}

/// Client with a short timeout, for exercising slow responses
pub fn impatient_client_for(server: &MockServer, timeout: Duration) -> GitHubClient {
    GitHubClient::with_timeout(OAuthToken::anonymous(), timeout)
        .expect("client should build")
        .with_base_uri(server.uri())
}

/// `count` items numbered from `start`, eg `{"id": 3}`
pub fn numbered_items(start: usize, count: usize) -> Value {
    Value::Array((start..start + count).map(|id| json!({ "id": id })).collect())
}

/// Serve `total` numbered items at `route` in pages of `per_page`
///
/// Each expected page is mounted with `expect(1)`, including the trailing
/// short (possibly empty) page, and any other page number fails the test.
pub async fn mount_paginated(server: &MockServer, route: &str, total: usize, per_page: usize) {
    let pages = total / per_page + 1;
    for page in 1..=pages {
        let start = (page - 1) * per_page;
        let count = per_page.min(total - start);
        Mock::given(method("GET"))
            .and(path(route))
            .and(query_param("page", page.to_string()))
            .and(query_param("per_page", per_page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(numbered_items(start, count)))
            .expect(1)
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(10)
        .expect(0)
        .mount(server)
        .await;
}

/// Serve a single JSON body at `route` for any page
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Ids of numbered items, in order
pub fn ids(items: &[ghfetch::github::Item]) -> Vec<u64> {
    items
        .iter()
        .map(|item| item["id"].as_u64().expect("numbered item"))
        .collect()
}
