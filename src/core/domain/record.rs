use crate::core::keys::ConfigKey;
use crate::core::types::RecordId;

/// The provider's stored record for an allow-listed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEnvRecord {
    id: RecordId,
    key: ConfigKey,
}

impl RemoteEnvRecord {
    /// Create a record.
    pub fn new(id: impl Into<RecordId>, key: ConfigKey) -> Self {
        Self {
            id: id.into(),
            key,
        }
    }

    /// Provider-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The key this record stores.
    pub fn key(&self) -> ConfigKey {
        self.key
    }
}
