//! Tests for `envsync push` against a mock provider.

use crate::support::provider::{count_requests, env_path, forbid_writes, mount_list, record_path};
use crate::support::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn accept_writes(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(env_path("v10")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_env_file() {
    let server = MockServer::start().await;
    mount_list(&server, &[]).await;
    accept_writes(&server).await;
    let t = Test::with_env_file(READY_ENV);

    let output = t.push(&server.uri(), &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "synced 2 variables");
    assert_stdout_contains(&output, "REVALIDATION_TOKEN (created)");
    assert_stdout_contains(&output, "redeploy");

    // DATABASE_URL stays local.
    assert_eq!(count_requests(&server, "POST").await, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_assignment_overrides_file() {
    let server = MockServer::start().await;
    mount_list(&server, &[("env_1", "REVALIDATION_TOKEN")]).await;
    Mock::given(method("POST"))
        .and(path(env_path("v10")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(record_path("env_1")))
        .and(body_partial_json(json!({ "value": "from-flag" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let t = Test::with_env_file(READY_ENV);

    let output = t.push(&server.uri(), &["REVALIDATION_TOKEN=from-flag"]);
    assert_success(&output);
    assert_stdout_contains(&output, "REVALIDATION_TOKEN (updated)");
    assert_stdout_contains(&output, "NEXT_PUBLIC_BACKEND_URL (created)");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    mount_list(&server, &[("env_1", "NEXT_PUBLIC_BACKEND_URL")]).await;
    forbid_writes(&server).await;
    let t = Test::with_env_file(READY_ENV);

    let output = t.push(&server.uri(), &["--dry-run"]);
    assert_success(&output);
    assert_stdout_contains(&output, "Planned writes");
    assert_stdout_contains(&output, "update");
    assert_stdout_contains(&output, "dry run: nothing was written");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_missing_required_makes_no_calls() {
    let server = MockServer::start().await;
    let t = Test::new();

    let output = t.push(&server.uri(), &["NEXT_PUBLIC_BACKEND_URL=https://cms.acme.io"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "REVALIDATION_TOKEN");
    assert_stderr_contains(&output, "envsync check");
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_reports_failing_key() {
    let server = MockServer::start().await;
    mount_list(&server, &[]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let t = Test::with_env_file(READY_ENV);

    let output = t.push(&server.uri(), &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "could not create variable NEXT_PUBLIC_BACKEND_URL");
    assert_stderr_contains(&output, "re-run envsync push");
}

#[test]
fn test_push_rejects_bad_assignment() {
    let t = Test::new();

    let output = t.push("http://127.0.0.1:1", &["REVALIDATION_TOKEN"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "expected KEY=VALUE");
}
