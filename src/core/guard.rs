//! Environment guard.
//!
//! Detects required keys that are unset, blank, or still holding a
//! placeholder value in a local environment, so the site can refuse to
//! render and point at what needs filling in.

use serde::Serialize;
use url::Url;

use crate::core::keys::ConfigKey;

/// A required key that needs a real value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingVar {
    pub key: ConfigKey,
    pub label: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    /// The value currently detected, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MissingVar {
    fn new(key: ConfigKey, value: Option<String>) -> Self {
        Self {
            key,
            label: key.label(),
            description: key.description(),
            example: key.example(),
            value,
        }
    }
}

/// Whether `value` counts as missing for `key`.
///
/// Blank values are missing, as are the placeholders shipped in sample env
/// files: a backend URL on `example.com` and the `change-me` token.
pub fn is_missing(key: ConfigKey, value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return true;
    };

    match key {
        ConfigKey::NextPublicBackendUrl => value.contains("example.com"),
        ConfigKey::RevalidationToken => value == "change-me",
        ConfigKey::NextPublicGtmId => false,
    }
}

/// Required keys that are missing according to `lookup`.
pub fn missing<F>(lookup: F) -> Vec<MissingVar>
where
    F: Fn(ConfigKey) -> Option<String>,
{
    ConfigKey::required()
        .filter_map(|key| {
            let value = lookup(key);
            is_missing(key, value.as_deref()).then(|| MissingVar::new(key, value))
        })
        .collect()
}

/// Normalize a backend base URL.
///
/// Returns origin plus path without a trailing slash, or `None` for blank,
/// `undefined`, `null`, `false` or unparseable input.
pub fn normalize_backend_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || ["undefined", "null", "false"]
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
    {
        return None;
    }

    let url = Url::parse(trimmed).ok()?;
    if !url.has_host() {
        return None;
    }
    let origin = url.origin().ascii_serialization();
    let path = url.path().trim_end_matches('/');
    Some(format!("{}{}", origin, path))
}
