//! Reconciliation.
//!
//! Decides, per desired entry, whether the provider needs a create or an
//! update, then issues those writes one at a time. The first failed write
//! aborts the pass; writes that already landed stay in place, and running
//! the pass again converges because every key then takes the update path.

use tracing::{debug, info};

use crate::core::domain::{Action, DesiredEntry, SyncResult};
use crate::core::provider::EnvProvider;
use crate::core::reader::RemoteState;
use crate::error::ProviderError;

/// Plan the writes needed to converge `current` to `desired`.
///
/// Keys present remotely are updated through their record id; all others
/// are created. Order follows `desired`.
pub fn plan(desired: &[DesiredEntry], current: &RemoteState) -> Vec<Action> {
    desired
        .iter()
        .map(|entry| match current.get(&entry.key()) {
            Some(record) => Action::Update {
                id: record.id().to_string(),
                key: entry.key(),
                value: entry.value().to_string(),
            },
            None => Action::Create {
                key: entry.key(),
                value: entry.value().to_string(),
            },
        })
        .collect()
}

/// Apply planned writes sequentially.
///
/// # Errors
///
/// `ProviderError::Write` for the first write that fails; nothing after it
/// is attempted.
pub async fn apply(
    provider: &dyn EnvProvider,
    actions: Vec<Action>,
) -> Result<SyncResult, ProviderError> {
    let mut result = SyncResult::default();

    for action in actions {
        debug!(key = %action.key(), kind = %action.kind(), "writing variable");
        match &action {
            Action::Create { key, value } => provider.create(*key, value).await?,
            Action::Update { id, key, value } => provider.update(id, *key, value).await?,
        }
        result.record(action.key(), action.kind());
    }

    info!(
        provider = provider.name(),
        created = result.created().len(),
        updated = result.updated().len(),
        "reconciled"
    );
    Ok(result)
}

/// Plan and apply in one step.
pub async fn reconcile(
    provider: &dyn EnvProvider,
    desired: &[DesiredEntry],
    current: &RemoteState,
) -> Result<SyncResult, ProviderError> {
    apply(provider, plan(desired, current)).await
}
