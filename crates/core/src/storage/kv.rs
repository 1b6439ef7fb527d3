use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::CoreError;

/// Trait abstraction over the on-device key-value store.
///
/// The mobile frontend owns the real store; the core only ever sees this
/// seam, so tests (and the desktop build) can substitute their own
/// implementation. Every operation is independently failable.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing an absent key is a no-op, not an error.
    async fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// In-memory store. Nothing survives the process; used as the
/// substitutable fake in tests and for ephemeral embedder setups.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self.entries.lock().map_err(|_| CoreError::StorageRead {
            key: key.to_string(),
            message: "store mutex poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().map_err(|_| CoreError::StorageWrite {
            key: key.to_string(),
            message: "store mutex poisoned".to_string(),
        })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().map_err(|_| CoreError::StorageWrite {
            key: key.to_string(),
            message: "store mutex poisoned".to_string(),
        })?;
        entries.remove(key);
        Ok(())
    }
}
