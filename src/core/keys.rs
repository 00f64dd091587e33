//! The configuration key allow-list.
//!
//! Only the keys listed here are ever read from a payload or written to the
//! provider. Anything else is dropped at the parse boundary, so the rest of
//! the crate never sees an unknown key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A runtime configuration key the site depends on.
///
/// Variant order is the canonical sync order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    /// Public base URL of the CMS backend.
    NextPublicBackendUrl,
    /// Token shared with the backend for on-demand revalidation.
    RevalidationToken,
    /// Google Tag Manager container id.
    NextPublicGtmId,
}

impl ConfigKey {
    /// Every allow-listed key, in sync order.
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::NextPublicBackendUrl,
        ConfigKey::RevalidationToken,
        ConfigKey::NextPublicGtmId,
    ];

    /// The environment variable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::NextPublicBackendUrl => "NEXT_PUBLIC_BACKEND_URL",
            Self::RevalidationToken => "REVALIDATION_TOKEN",
            Self::NextPublicGtmId => "NEXT_PUBLIC_GTM_ID",
        }
    }

    /// Whether a sync must carry a non-empty value for this key.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::NextPublicGtmId)
    }

    /// Required keys, in sync order.
    pub fn required() -> impl Iterator<Item = ConfigKey> {
        Self::ALL.into_iter().filter(|k| k.is_required())
    }

    /// Optional keys, in sync order.
    pub fn optional() -> impl Iterator<Item = ConfigKey> {
        Self::ALL.into_iter().filter(|k| !k.is_required())
    }

    /// Short label shown next to prompts and status lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::NextPublicBackendUrl => "Backend URL",
            Self::RevalidationToken => "Revalidation token",
            Self::NextPublicGtmId => "Tag Manager id",
        }
    }

    /// What the value is used for.
    pub fn description(self) -> &'static str {
        match self {
            Self::NextPublicBackendUrl => {
                "Public base URL of the CMS backend, reachable from the site's server functions."
            }
            Self::RevalidationToken => {
                "Token shared between the backend and the site to revalidate pages from webhooks."
            }
            Self::NextPublicGtmId => "Google Tag Manager container id; leave blank to disable.",
        }
    }

    /// A value suitable for local development.
    pub fn example(self) -> &'static str {
        match self {
            Self::NextPublicBackendUrl => "http://localhost:8000",
            Self::RevalidationToken => "generate-a-secure-token",
            Self::NextPublicGtmId => "GTM-XXXXXXX",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ValidationError::UnknownKey(s.to_string()))
    }
}
