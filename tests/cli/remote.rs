//! Tests for `envsync remote`.

use crate::support::provider::mount_list;
use crate::support::*;
use serde_json::Value;
use wiremock::MockServer;

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_lists_stored_records() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        &[("env_7", "REVALIDATION_TOKEN"), ("env_8", "DATABASE_URL")],
    )
    .await;
    let t = Test::new();

    let output = t
        .provider_cmd(&server.uri())
        .arg("remote")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "stored (env_7)");
    assert_stdout_contains(&output, "not stored (optional)");
    assert!(!stdout(&output).contains("DATABASE_URL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remote_json() {
    let server = MockServer::start().await;
    mount_list(&server, &[("env_7", "NEXT_PUBLIC_BACKEND_URL")]).await;
    let t = Test::new();

    let output = t
        .provider_cmd(&server.uri())
        .args(["remote", "--json"])
        .output()
        .unwrap();
    assert_success(&output);

    let entries: Value = serde_json::from_str(&stdout(&output)).expect("valid json");
    assert_eq!(entries[0]["key"], "NEXT_PUBLIC_BACKEND_URL");
    assert_eq!(entries[0]["id"], "env_7");
    assert_eq!(entries[0]["required"], true);
    assert_eq!(entries[1]["id"], Value::Null);
}
