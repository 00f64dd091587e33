//! Mock provider helpers.

use envsync::core::config::ProviderConfig;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{PROJECT, TOKEN};

/// Path of the env collection for the test project.
pub fn env_path(version: &str) -> String {
    format!("/{}/projects/{}/env", version, PROJECT)
}

/// Path of one stored record.
pub fn record_path(id: &str) -> String {
    format!("{}/{}", env_path("v10"), id)
}

/// Provider config aimed at the mock server.
pub fn provider_config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new(Some(TOKEN.to_string()), Some(PROJECT.to_string()))
        .with_api_base(server.uri())
}

/// A listing response with `(id, key)` records.
pub fn listing(records: &[(&str, &str)]) -> Value {
    let envs: Vec<Value> = records
        .iter()
        .map(|(id, key)| {
            json!({
                "id": id,
                "key": key,
                "type": "encrypted",
                "target": ["production", "preview", "development"]
            })
        })
        .collect();
    json!({ "envs": envs })
}

/// Serve the listing once per sync.
pub async fn mount_list(server: &MockServer, records: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(env_path("v9")))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(records)))
        .mount(server)
        .await;
}

/// Fail every write; `expect(0)` turns any write into a test failure.
pub async fn forbid_writes(server: &MockServer) {
    for verb in ["POST", "PATCH"] {
        Mock::given(method(verb))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(server)
            .await;
    }
}

/// Number of requests with `verb` the mock server has seen.
pub async fn count_requests(server: &MockServer, verb: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == verb)
        .count()
}
