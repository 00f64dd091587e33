use crate::core::keys::ConfigKey;

/// A key and the value the caller wants stored for it.
///
/// Only built by the sanitizer, so the value is always trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredEntry {
    key: ConfigKey,
    value: String,
}

impl DesiredEntry {
    pub(crate) fn new(key: ConfigKey, value: String) -> Self {
        debug_assert!(!value.is_empty() && value.trim() == value);
        Self { key, value }
    }

    /// The configuration key.
    pub fn key(&self) -> ConfigKey {
        self.key
    }

    /// The trimmed value.
    pub fn value(&self) -> &str {
        &self.value
    }
}
