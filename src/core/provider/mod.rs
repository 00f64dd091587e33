//! Deployment provider access.
//!
//! The sync workflow only needs three operations from a provider: list the
//! project's variables, create one, and update one by id. They sit behind
//! the `EnvProvider` trait so the reconciler can be driven by the HTTP
//! client in production and by an in-memory fake in tests.
//!
//! ## Adding a New Provider
//!
//! 1. Implement `EnvProvider`
//! 2. Add the implementation in a new file next to `vercel.rs`
//! 3. Re-export it from this module

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::keys::ConfigKey;
use crate::error::ProviderError;

mod vercel;

#[cfg(test)]
pub(crate) mod fake;

pub use vercel::VercelClient;

/// A variable as listed by the provider.
///
/// `key` is whatever the provider stores, allow-listed or not.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEnv {
    pub id: String,
    pub key: String,
}

impl RemoteEnv {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
        }
    }
}

/// Environment variable storage at a deployment provider.
///
/// Implementations are scoped to a single project. Every write applies the
/// value to all deployment targets with the encrypted classification.
#[async_trait]
pub trait EnvProvider: Send + Sync {
    /// Provider name for log lines.
    fn name(&self) -> &'static str;

    /// List every variable stored for the project, in provider order.
    ///
    /// # Errors
    ///
    /// `ProviderError::Unavailable` on transport failure or non-success status.
    async fn list(&self) -> Result<Vec<RemoteEnv>, ProviderError>;

    /// Create a new variable.
    ///
    /// # Errors
    ///
    /// `ProviderError::Write` naming `key`.
    async fn create(&self, key: ConfigKey, value: &str) -> Result<(), ProviderError>;

    /// Overwrite the variable stored under `id`.
    ///
    /// # Errors
    ///
    /// `ProviderError::Write` naming `key`.
    async fn update(&self, id: &str, key: ConfigKey, value: &str) -> Result<(), ProviderError>;
}
