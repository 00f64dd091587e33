//! Planned provider writes.

use std::fmt;

use serde::Serialize;

use crate::core::keys::ConfigKey;
use crate::core::types::RecordId;

/// Whether a write creates a new variable or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteKind {
    Create,
    Update,
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// A single write the reconciler will issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Key is not stored yet.
    Create { key: ConfigKey, value: String },
    /// Key is stored under `id`; overwrite its value.
    Update {
        id: RecordId,
        key: ConfigKey,
        value: String,
    },
}

impl Action {
    /// The key being written.
    pub fn key(&self) -> ConfigKey {
        match self {
            Self::Create { key, .. } | Self::Update { key, .. } => *key,
        }
    }

    /// The value being written.
    pub fn value(&self) -> &str {
        match self {
            Self::Create { value, .. } | Self::Update { value, .. } => value,
        }
    }

    pub fn kind(&self) -> WriteKind {
        match self {
            Self::Create { .. } => WriteKind::Create,
            Self::Update { .. } => WriteKind::Update,
        }
    }
}
