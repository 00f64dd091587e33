//! Remote state reading.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::core::domain::RemoteEnvRecord;
use crate::core::keys::ConfigKey;
use crate::core::provider::{EnvProvider, RemoteEnv};
use crate::error::ProviderError;

/// The provider's current records for allow-listed keys.
pub type RemoteState = HashMap<ConfigKey, RemoteEnvRecord>;

/// Fetch the provider's current inventory and index it by key.
///
/// One read, no retry.
///
/// # Errors
///
/// `ProviderError::Unavailable` if the provider cannot be read.
pub async fn fetch_current(provider: &dyn EnvProvider) -> Result<RemoteState, ProviderError> {
    let records = provider.list().await?;
    let state = index(records);
    debug!(
        provider = provider.name(),
        known = state.len(),
        "remote state fetched"
    );
    Ok(state)
}

/// Build the key lookup from a provider listing.
///
/// Keys outside the allow-list are skipped. When the provider lists a key
/// twice, the later record wins.
pub fn index(records: Vec<RemoteEnv>) -> RemoteState {
    let mut state = RemoteState::new();
    for record in records {
        match record.key.parse::<ConfigKey>() {
            Ok(key) => {
                state.insert(key, RemoteEnvRecord::new(record.id, key));
            }
            Err(_) => trace!(key = %record.key, "ignoring remote key outside allow-list"),
        }
    }
    state
}
