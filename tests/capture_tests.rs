//! Capture command tests

mod support;

use ghfetch::commands::{CaptureCommand, Command, CommandContext};
use serde_json::json;
use support::{client_for, mount_json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_capture_fixtures(server: &MockServer) {
    mount_json(server, "/rate_limit", json!({"rate": {"limit": 60, "remaining": 59}})).await;
    mount_json(server, "/users/odysseus", json!({"login": "odysseus"})).await;
    mount_json(server, "/users/odysseus/repos", json!([{"name": "go_git"}])).await;
    mount_json(server, "/repos/odysseus/go_git", json!({"name": "go_git"})).await;
    mount_json(server, "/repos/odysseus/go_git/languages", json!({"Go": 100})).await;
    mount_json(server, "/orgs/recursecenter", json!({"login": "recursecenter"})).await;
    mount_json(
        server,
        "/orgs/recursecenter/members",
        json!([{"login": "a"}, {"login": "b"}]),
    )
    .await;
}

fn capture_command(output: std::path::PathBuf, extra: Vec<String>) -> CaptureCommand {
    CaptureCommand {
        user: "odysseus".to_string(),
        repo: "go_git".to_string(),
        org: "recursecenter".to_string(),
        extra_queries: extra,
        output,
    }
}

#[tokio::test]
async fn test_capture_writes_one_key_per_query() {
    let server = MockServer::start().await;
    mount_capture_fixtures(&server).await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("testdata.json");
    let command = capture_command(output.clone(), Vec::new());

    let context = CommandContext {
        client: client_for(&server, "", 100),
    };
    command.execute(&context).await.unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let object = written.as_object().unwrap();

    assert_eq!(object.len(), 7);
    assert_eq!(written["rate_limit"][0]["rate"]["limit"], 60);
    assert_eq!(written["repos/odysseus/go_git/languages"][0]["Go"], 100);
    assert_eq!(
        written["orgs/recursecenter/members"],
        json!([{"login": "a"}, {"login": "b"}])
    );
}

#[tokio::test]
async fn test_capture_includes_extra_queries() {
    let server = MockServer::start().await;
    mount_capture_fixtures(&server).await;
    mount_json(&server, "/users/octocat", json!({"login": "octocat"})).await;

    let command = capture_command(
        std::path::PathBuf::from("unused.json"),
        vec!["users/octocat".to_string()],
    );
    let captures = command
        .collect(&client_for(&server, "", 100))
        .await
        .unwrap();

    assert_eq!(captures.len(), 8);
    assert_eq!(captures["users/octocat"][0]["login"], "octocat");
}

#[tokio::test]
async fn test_capture_failure_writes_nothing() {
    let server = MockServer::start().await;
    mount_capture_fixtures(&server).await;
    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("testdata.json");
    let command = capture_command(output.clone(), vec!["users/nobody".to_string()]);

    let context = CommandContext {
        client: client_for(&server, "", 100),
    };
    let err = command.execute(&context).await.unwrap_err();

    assert!(err.to_string().contains("users/nobody"));
    assert!(!output.exists());
}
