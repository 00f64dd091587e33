//! The sync workflow.
//!
//! `sanitize` -> `fetch_current` -> `reconcile`, with the provider
//! credentials passed in explicitly. Each call re-reads remote state; nothing
//! is cached between calls.

use std::sync::Arc;

use tracing::info;

use crate::core::config::ProviderConfig;
use crate::core::domain::{Action, SyncResult};
use crate::core::provider::{EnvProvider, VercelClient};
use crate::core::reader::{self, RemoteState};
use crate::core::reconcile;
use crate::core::sanitize::sanitize;
use crate::core::types::RawPayload;
use crate::error::Result;

/// Runs sync passes against one provider project.
pub struct SyncService {
    provider: Arc<dyn EnvProvider>,
}

impl SyncService {
    /// Build a service backed by the Vercel API.
    ///
    /// # Errors
    ///
    /// `ConfigError` when the token or project id is missing; nothing is
    /// sent to the network in that case.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = VercelClient::new(config)?;
        Ok(Self::with_provider(Arc::new(client)))
    }

    /// Build a service over any provider.
    pub fn with_provider(provider: Arc<dyn EnvProvider>) -> Self {
        Self { provider }
    }

    /// Converge the provider to `raw` and report the keys written.
    ///
    /// # Errors
    ///
    /// `ValidationError` before any network call, `ProviderError::Unavailable`
    /// before any write, or `ProviderError::Write` naming the first key that
    /// failed. Writes before the failing one are not rolled back.
    pub async fn sync(&self, raw: &RawPayload) -> Result<SyncResult> {
        let desired = sanitize(raw)?;
        info!(
            provider = self.provider.name(),
            keys = desired.len(),
            "sync started"
        );

        let current = reader::fetch_current(self.provider.as_ref()).await?;
        let result = reconcile::reconcile(self.provider.as_ref(), &desired, &current).await?;

        info!(written = result.len(), "sync finished");
        Ok(result)
    }

    /// The writes `sync` would issue, without issuing them.
    pub async fn plan(&self, raw: &RawPayload) -> Result<Vec<Action>> {
        let desired = sanitize(raw)?;
        let current = reader::fetch_current(self.provider.as_ref()).await?;
        Ok(reconcile::plan(&desired, &current))
    }

    /// The provider's current records for allow-listed keys.
    pub async fn current(&self) -> Result<RemoteState> {
        Ok(reader::fetch_current(self.provider.as_ref()).await?)
    }
}

/// One-shot sync with an explicit config.
pub async fn sync(config: &ProviderConfig, raw: &RawPayload) -> Result<SyncResult> {
    SyncService::new(config)?.sync(raw).await
}
