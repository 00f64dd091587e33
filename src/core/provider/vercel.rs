//! Vercel REST API client.
//!
//! Uses the project environment endpoints:
//!
//! - `GET   /v9/projects/{project}/env`       list
//! - `POST  /v10/projects/{project}/env`      create
//! - `PATCH /v10/projects/{project}/env/{id}` update
//!
//! All calls carry a bearer token and, when an organization is configured,
//! a `teamId` query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use super::{EnvProvider, RemoteEnv};
use crate::core::config::ProviderConfig;
use crate::core::constants;
use crate::core::domain::{DeploymentTarget, WriteKind};
use crate::core::keys::ConfigKey;
use crate::error::{ConfigError, ProviderError, Result};

/// HTTP client for one Vercel project.
pub struct VercelClient {
    client: Client,
    base: Url,
    token: Zeroizing<String>,
    project_id: String,
    org_id: Option<String>,
}

#[derive(Deserialize)]
struct ListEnvResponse {
    envs: Vec<RemoteEnv>,
}

#[derive(Serialize)]
struct CreateEnvBody<'a> {
    key: &'a str,
    value: &'a str,
    target: &'a [DeploymentTarget],
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct UpdateEnvBody<'a> {
    value: &'a str,
    target: &'a [DeploymentTarget],
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl VercelClient {
    /// Build a client from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config is incomplete, or an HTTP error
    /// if the TLS client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let token = config.token().ok_or(ConfigError::MissingToken)?;
        let project_id = config.project_id().ok_or(ConfigError::MissingProjectId)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(constants::REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("envsync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base: config.base_url()?,
            token: Zeroizing::new(token.to_string()),
            project_id: project_id.to_string(),
            org_id: config.org_id().map(str::to_string),
        })
    }

    /// URL of the env collection, or of one record when `id` is given.
    fn endpoint(&self, version: &str, id: Option<&str>) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(version)
                .push("projects")
                .push(&self.project_id)
                .push("env");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        if let Some(org) = &self.org_id {
            url.query_pairs_mut().append_pair("teamId", org);
        }
        url
    }

    async fn write(
        &self,
        request: reqwest::RequestBuilder,
        key: ConfigKey,
        kind: WriteKind,
    ) -> std::result::Result<(), ProviderError> {
        let failed = |reason: String| ProviderError::Write { key, kind, reason };

        let resp = request
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(failed(describe_failure(status, &body)));
        }

        debug!(key = %key, %kind, "variable written");
        Ok(())
    }
}

#[async_trait]
impl EnvProvider for VercelClient {
    fn name(&self) -> &'static str {
        "vercel"
    }

    async fn list(&self) -> std::result::Result<Vec<RemoteEnv>, ProviderError> {
        let url = self.endpoint("v9", None);
        debug!(project = %self.project_id, "listing project variables");

        let unavailable = |reason: String| ProviderError::Unavailable { reason };

        let resp = self
            .client
            .get(url)
            .bearer_auth(self.token.as_str())
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(unavailable(describe_failure(status, &body)));
        }

        let body: ListEnvResponse = resp
            .json()
            .await
            .map_err(|e| unavailable(format!("unexpected response: {}", e)))?;

        debug!(count = body.envs.len(), "project variables listed");
        Ok(body.envs)
    }

    async fn create(&self, key: ConfigKey, value: &str) -> std::result::Result<(), ProviderError> {
        let body = CreateEnvBody {
            key: key.name(),
            value,
            target: &DeploymentTarget::ALL,
            kind: constants::ENV_TYPE,
        };
        let request = self.client.post(self.endpoint("v10", None)).json(&body);
        self.write(request, key, WriteKind::Create).await
    }

    async fn update(
        &self,
        id: &str,
        key: ConfigKey,
        value: &str,
    ) -> std::result::Result<(), ProviderError> {
        let body = UpdateEnvBody {
            value,
            target: &DeploymentTarget::ALL,
            kind: constants::ENV_TYPE,
        };
        let request = self.client.patch(self.endpoint("v10", Some(id))).json(&body);
        self.write(request, key, WriteKind::Update).await
    }
}

/// Human-readable reason for a non-success response.
///
/// Uses the provider's `error.message` when the body carries one.
fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => format!("HTTP {}: {}", status, parsed.error.message),
        Err(_) => format!("HTTP {}", status),
    }
}
