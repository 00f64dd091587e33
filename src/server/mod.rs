//! HTTP surface.
//!
//! ```text
//! POST /api/runtime-config   sync the posted key/values to the provider
//! GET  /api/runtime-config   which required keys this server is missing
//! GET  /healthz              liveness
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::config::ProviderConfig;
use crate::error::Result;

pub mod error;
pub mod routes;

/// Shared, read-only handler state.
///
/// Holds configuration only. Provider clients are built per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ProviderConfig>,
    environment: Arc<HashMap<String, String>>,
}

impl AppState {
    /// `environment` is the snapshot the guard status is computed from.
    pub fn new(config: ProviderConfig, environment: HashMap<String, String>) -> Self {
        Self {
            config: Arc::new(config),
            environment: Arc::new(environment),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/runtime-config",
            get(routes::config_status).post(routes::sync_config),
        )
        .route("/healthz", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve until `signal` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(signal)
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
