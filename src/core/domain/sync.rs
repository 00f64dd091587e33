use serde::Serialize;

use super::WriteKind;
use crate::core::keys::ConfigKey;

/// Result of a sync pass.
///
/// Only produced when every write succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    written: Vec<(ConfigKey, WriteKind)>,
}

impl SyncResult {
    pub(crate) fn record(&mut self, key: ConfigKey, kind: WriteKind) {
        self.written.push((key, kind));
    }

    /// Keys written, in write order.
    pub fn keys(&self) -> Vec<ConfigKey> {
        self.written.iter().map(|(k, _)| *k).collect()
    }

    /// Keys that did not exist remotely before this pass.
    pub fn created(&self) -> Vec<ConfigKey> {
        self.filter(WriteKind::Create)
    }

    /// Keys whose existing record was overwritten.
    pub fn updated(&self) -> Vec<ConfigKey> {
        self.filter(WriteKind::Update)
    }

    /// Every write with its kind.
    pub fn writes(&self) -> &[(ConfigKey, WriteKind)] {
        &self.written
    }

    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }

    fn filter(&self, kind: WriteKind) -> Vec<ConfigKey> {
        self.written
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(key, _)| *key)
            .collect()
    }
}
