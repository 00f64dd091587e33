//! Payload sanitizing.
//!
//! Turns an untrusted key/value body into the ordered list of entries the
//! reconciler will write. Nothing here touches the network.

use std::collections::BTreeMap;

use tracing::trace;

use crate::core::domain::DesiredEntry;
use crate::core::keys::ConfigKey;
use crate::core::types::RawPayload;
use crate::error::ValidationError;

/// Validate and normalize a raw payload.
///
/// - Names outside the allow-list are dropped.
/// - Values are trimmed.
/// - Every required key must be present with a non-empty value.
/// - Optional keys with an empty value are left out, so they never blank
///   an existing remote value.
///
/// Entries come back in allow-list order.
///
/// # Errors
///
/// `ValidationError::MissingRequired` naming every absent or blank required
/// key, or `ValidationError::NoEntries` if nothing usable is left.
pub fn sanitize(raw: &RawPayload) -> Result<Vec<DesiredEntry>, ValidationError> {
    let mut values: BTreeMap<ConfigKey, String> = BTreeMap::new();

    for (name, value) in raw {
        let Ok(key) = name.parse::<ConfigKey>() else {
            trace!(name = %name, "dropping key outside allow-list");
            continue;
        };
        let trimmed = value.as_deref().unwrap_or_default().trim().to_string();
        values.insert(key, trimmed);
    }

    let missing: Vec<ConfigKey> = ConfigKey::required()
        .filter(|key| values.get(key).map_or(true, |v| v.is_empty()))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired(missing));
    }

    let entries: Vec<DesiredEntry> = values
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| DesiredEntry::new(key, value))
        .collect();

    if entries.is_empty() {
        return Err(ValidationError::NoEntries);
    }

    Ok(entries)
}

/// Parse a JSON request body into a raw payload.
///
/// The body must be a JSON object. `null` values count as absent; other
/// non-string values are rejected only for allow-listed keys, since unknown
/// keys are dropped anyway.
pub fn payload_from_json(body: &[u8]) -> Result<RawPayload, ValidationError> {
    let object: BTreeMap<String, serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;

    let mut payload = RawPayload::new();
    for (name, value) in object {
        let value = match value {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            _ if name.parse::<ConfigKey>().is_err() => continue,
            other => {
                return Err(ValidationError::MalformedBody(format!(
                    "{} must be a string, got {}",
                    name, other
                )))
            }
        };
        payload.insert(name, value);
    }

    Ok(payload)
}
