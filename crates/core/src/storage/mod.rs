pub mod keys;
pub mod kv;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use self::kv::KeyValueStore;

/// Read a JSON-encoded collection from the store.
/// An absent key decodes as an empty collection.
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, CoreError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw).map_err(|e| {
            CoreError::Deserialization(format!("Failed to decode '{key}' collection: {e}"))
        }),
        None => Ok(Vec::new()),
    }
}

/// Serialize a collection to JSON and write it under `key` in one store call.
pub async fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), CoreError> {
    let raw = serde_json::to_string(items).map_err(|e| {
        CoreError::Serialization(format!("Failed to encode '{key}' collection: {e}"))
    })?;
    store.set(key, &raw).await
}
