//! Remote command - show what the provider currently stores.

use serde::Serialize;

use crate::cli::{output, runtime, ProviderArgs};
use crate::core::config::Settings;
use crate::core::keys::ConfigKey;
use crate::core::sync::SyncService;
use crate::error::Result;

#[derive(Serialize)]
struct RemoteEntry {
    key: ConfigKey,
    id: Option<String>,
    required: bool,
}

/// List allow-listed keys and their provider record ids.
pub fn execute(json: bool, provider: ProviderArgs) -> Result<()> {
    let settings = Settings::load()?;
    let config = provider.into_config(&settings);
    let service = SyncService::new(&config)?;

    let state = runtime()?.block_on(service.current())?;

    let entries: Vec<RemoteEntry> = ConfigKey::ALL
        .into_iter()
        .map(|key| RemoteEntry {
            key,
            id: state.get(&key).map(|r| r.id().to_string()),
            required: key.is_required(),
        })
        .collect();

    if json {
        return output::json(&entries);
    }

    output::section(&format!(
        "Remote variables ({})",
        config.project_id().unwrap_or_default()
    ));
    for entry in &entries {
        let status = match (&entry.id, entry.required) {
            (Some(id), _) => format!("stored ({})", id),
            (None, true) => "not stored".to_string(),
            (None, false) => "not stored (optional)".to_string(),
        };
        output::kv(entry.key.name(), status);
    }

    Ok(())
}
