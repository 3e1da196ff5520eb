//! Endpoint accessor tests against a mock GitHub API

mod support;

use ghfetch::github::{GitHubError, RateLimitStatus};
use serde_json::json;
use support::{client_for, mount_json};
use wiremock::MockServer;

#[tokio::test]
async fn test_org_returns_single_object() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/orgs/recursecenter",
        json!({"login": "recursecenter", "public_repos": 42}),
    )
    .await;

    let org = client_for(&server, "", 100)
        .org("recursecenter")
        .await
        .unwrap();
    assert_eq!(org["login"], "recursecenter");
    assert_eq!(org["public_repos"], 42);
}

#[tokio::test]
async fn test_org_with_empty_array_is_empty_response() {
    let server = MockServer::start().await;
    mount_json(&server, "/orgs/ghost", json!([])).await;

    let err = client_for(&server, "", 100)
        .org("ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::EmptyResponse(ref q) if q == "orgs/ghost"));
}

#[tokio::test]
async fn test_org_members_and_handles() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/orgs/acme/members",
        json!([{"login": "a", "id": 1}, {"login": "b", "id": 2}]),
    )
    .await;

    let client = client_for(&server, "", 100);

    let members = client.org_members("acme").await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["id"], 1);

    let handles = client.org_member_handles("acme").await.unwrap();
    assert_eq!(handles, vec!["a", "b"]);
}

#[tokio::test]
async fn test_member_handles_require_login() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/orgs/acme/members",
        json!([{"login": "a"}, {"id": 2}]),
    )
    .await;

    let err = client_for(&server, "", 100)
        .org_member_handles("acme")
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::MissingField(ref k) if k == "login"));
}

#[tokio::test]
async fn test_member_handles_require_string_login() {
    let server = MockServer::start().await;
    mount_json(&server, "/orgs/acme/members", json!([{"login": 7}])).await;

    let err = client_for(&server, "", 100)
        .org_member_handles("acme")
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::UnexpectedType { .. }));
}

#[tokio::test]
async fn test_rate_limit_projections() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/rate_limit",
        json!({"rate": {"limit": 5000, "remaining": 4321}}),
    )
    .await;

    let client = client_for(&server, "abc123", 100);
    assert_eq!(client.rate_limit().await.unwrap(), 5000);
    assert_eq!(client.rate_limit_remaining().await.unwrap(), 4321);
    assert_eq!(
        client.rate_limit_status().await.unwrap(),
        RateLimitStatus {
            limit: 5000,
            remaining: 4321,
            reset: 0
        }
    );
}

#[tokio::test]
async fn test_rate_limit_with_wrong_shape() {
    let server = MockServer::start().await;
    mount_json(&server, "/rate_limit", json!({"rate": {"limit": "lots"}})).await;

    let err = client_for(&server, "", 100)
        .rate_limit()
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::UnexpectedType { ref field, .. } if field == "limit"));
}

#[tokio::test]
async fn test_user_and_user_repos() {
    let server = MockServer::start().await;
    mount_json(&server, "/users/odysseus", json!({"login": "odysseus"})).await;
    mount_json(
        &server,
        "/users/odysseus/repos",
        json!([{"name": "go_git"}, {"name": "dotfiles"}]),
    )
    .await;

    let client = client_for(&server, "", 100);
    assert_eq!(client.user("odysseus").await.unwrap()["login"], "odysseus");

    let repos = client.user_repos("odysseus").await.unwrap();
    let names: Vec<_> = repos.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["go_git", "dotfiles"]);
}

#[tokio::test]
async fn test_repository_and_languages() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/repos/odysseus/go_git",
        json!({"full_name": "odysseus/go_git"}),
    )
    .await;
    mount_json(
        &server,
        "/repos/odysseus/go_git/languages",
        json!({"Go": 18234, "Shell": 120}),
    )
    .await;

    let client = client_for(&server, "", 100);
    let repo = client.repository("odysseus", "go_git").await.unwrap();
    assert_eq!(repo["full_name"], "odysseus/go_git");

    let languages = client
        .repository_languages("odysseus", "go_git")
        .await
        .unwrap();
    assert_eq!(languages.get("Go"), Some(&18234));
    assert_eq!(languages.get("Shell"), Some(&120));
    assert_eq!(languages.len(), 2);
}
