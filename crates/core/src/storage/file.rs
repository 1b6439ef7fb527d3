use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::CoreError;
use super::kv::KeyValueStore;

/// Magic bytes identifying an EGX Tracker snapshot file.
pub const MAGIC: &[u8; 4] = b"EGXT";

/// Current snapshot format version.
pub const CURRENT_VERSION: u16 = 1;

/// Header size in bytes: magic(4) + version(2).
pub const HEADER_SIZE: usize = 6;

/// File-backed store for native builds: the whole key-value map lives in
/// one snapshot file and is rewritten on every mutation.
///
/// Layout: `[EGXT: 4B] [version: 2B LE] [bincode map: variable]`
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or create) a snapshot file. A missing file is an empty store;
    /// the file itself is only created on the first write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let bytes = std::fs::read(&path)?;
            decode_snapshot(&bytes)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), CoreError> {
        let bytes = encode_snapshot(entries)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
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
        self.persist(&entries).map_err(|e| CoreError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.entries.lock().map_err(|_| CoreError::StorageWrite {
            key: key.to_string(),
            message: "store mutex poisoned".to_string(),
        })?;
        if entries.remove(key).is_none() {
            return Ok(()); // absent key: nothing to rewrite
        }
        self.persist(&entries).map_err(|e| CoreError::StorageWrite {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

/// Serialize the key-value map into snapshot bytes.
pub fn encode_snapshot(entries: &HashMap<String, String>) -> Result<Vec<u8>, CoreError> {
    let body = bincode::serialize(entries)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))?;
    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&CURRENT_VERSION.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

/// Parse snapshot bytes back into the key-value map.
/// Validates the magic bytes and format version first.
pub fn decode_snapshot(data: &[u8]) -> Result<HashMap<String, String>, CoreError> {
    if data.len() < HEADER_SIZE {
        return Err(CoreError::InvalidSnapshotFormat(
            "File too small to be a valid EGXT snapshot".into(),
        ));
    }
    if &data[0..4] != MAGIC {
        return Err(CoreError::InvalidSnapshotFormat(
            "Invalid magic bytes - not an EGXT snapshot".into(),
        ));
    }
    let version = u16::from_le_bytes([data[4], data[5]]);
    if version == 0 || version > CURRENT_VERSION {
        return Err(CoreError::UnsupportedSnapshotVersion(version));
    }
    bincode::deserialize(&data[HEADER_SIZE..])
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize snapshot: {e}")))
}
