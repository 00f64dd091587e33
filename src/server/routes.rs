//! Route handlers.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::core::guard::{self, MissingVar};
use crate::core::keys::ConfigKey;
use crate::core::sanitize;
use crate::core::sync::SyncService;

/// Body of a successful sync.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub updated: Vec<ConfigKey>,
}

/// Guard status of the server's own environment.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub missing: Vec<MissingVar>,
    #[serde(rename = "backendUrl")]
    pub backend_url: Option<String>,
}

/// `POST /api/runtime-config`
///
/// The body is taken as raw bytes so malformed JSON gets the same
/// `{ message }` shape as every other failure.
pub async fn sync_config(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SyncResponse>, ApiError> {
    let service = SyncService::new(&state.config)?;
    let payload = sanitize::payload_from_json(&body)?;

    let result = service.sync(&payload).await?;
    info!(updated = result.len(), "runtime config synced");

    Ok(Json(SyncResponse {
        updated: result.keys(),
    }))
}

/// `GET /api/runtime-config`
pub async fn config_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let missing = guard::missing(|key| state.environment.get(key.name()).cloned());
    let backend_url = state
        .environment
        .get(ConfigKey::NextPublicBackendUrl.name())
        .and_then(|raw| guard::normalize_backend_url(raw));

    Json(StatusResponse {
        ready: missing.is_empty(),
        missing,
        backend_url,
    })
}

/// `GET /healthz`
pub async fn health() -> &'static str {
    "ok"
}
