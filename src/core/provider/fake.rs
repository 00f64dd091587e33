//! In-memory provider for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{EnvProvider, RemoteEnv};
use crate::core::domain::WriteKind;
use crate::core::keys::ConfigKey;
use crate::error::ProviderError;

/// A call the fake received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create { key: ConfigKey, value: String },
    Update { id: String, key: ConfigKey, value: String },
}

#[derive(Default)]
struct State {
    stored: Vec<(String, String, String)>,
    calls: Vec<Call>,
    next_id: usize,
}

/// Stores variables in memory and records every call.
#[derive(Default)]
pub struct FakeProvider {
    state: Mutex<State>,
    list_fails: bool,
    fail_write_for: Option<ConfigKey>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-store a variable under `id`.
    pub fn with_stored(self, id: &str, key: &str, value: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .stored
            .push((id.to_string(), key.to_string(), value.to_string()));
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    pub fn failing_write(mut self, key: ConfigKey) -> Self {
        self.fail_write_for = Some(key);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::List))
            .collect()
    }

    /// Stored value for a key name.
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .stored
            .iter()
            .find(|(_, k, _)| k == key)
            .map(|(_, _, v)| v.clone())
    }

    fn check_write(&self, key: ConfigKey, kind: WriteKind) -> Result<(), ProviderError> {
        if self.fail_write_for == Some(key) {
            return Err(ProviderError::Write {
                key,
                kind,
                reason: "HTTP 500 Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EnvProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn list(&self) -> Result<Vec<RemoteEnv>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if self.list_fails {
            return Err(ProviderError::Unavailable {
                reason: "HTTP 503 Service Unavailable".to_string(),
            });
        }
        Ok(state
            .stored
            .iter()
            .map(|(id, key, _)| RemoteEnv::new(id.clone(), key.clone()))
            .collect())
    }

    async fn create(&self, key: ConfigKey, value: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create {
            key,
            value: value.to_string(),
        });
        self.check_write(key, WriteKind::Create)?;
        state.next_id += 1;
        let id = format!("env_new_{}", state.next_id);
        state
            .stored
            .push((id, key.name().to_string(), value.to_string()));
        Ok(())
    }

    async fn update(&self, id: &str, key: ConfigKey, value: &str) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update {
            id: id.to_string(),
            key,
            value: value.to_string(),
        });
        self.check_write(key, WriteKind::Update)?;
        if let Some(entry) = state.stored.iter_mut().find(|(i, _, _)| i == id) {
            entry.2 = value.to_string();
        }
        Ok(())
    }
}
