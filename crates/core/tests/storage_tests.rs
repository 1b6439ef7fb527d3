// ═══════════════════════════════════════════════════════════════════
// Storage Tests — MemoryStore, FileStore, snapshot format, collections
// ═══════════════════════════════════════════════════════════════════

use std::collections::HashMap;

use egx_tracker_core::errors::CoreError;
use egx_tracker_core::models::watchlist::WatchItem;
use egx_tracker_core::storage::file::{
    decode_snapshot, encode_snapshot, FileStore, CURRENT_VERSION, HEADER_SIZE, MAGIC,
};
use egx_tracker_core::storage::kv::{KeyValueStore, MemoryStore};
use egx_tracker_core::storage::{read_collection, write_collection};

// ═══════════════════════════════════════════════════════════════════
// MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[tokio::test]
    async fn get_absent_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_roundtrips() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set("k", "old").await.unwrap();
        store.set("k", "new").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn remove_deletes_the_key() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn remove_absent_key_is_a_no_op() {
        let store = MemoryStore::new();
        assert!(store.remove("never-set").await.is_ok());
    }

    #[tokio::test]
    async fn len_counts_keys() {
        let store = MemoryStore::new();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        assert_eq!(store.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Collection helpers
// ═══════════════════════════════════════════════════════════════════

mod collections {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_as_empty_collection() {
        let store = MemoryStore::new();
        let items: Vec<WatchItem> = read_collection(&store, "watchlist").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_roundtrips() {
        let store = MemoryStore::new();
        let items = vec![
            WatchItem::new("emfd", "e-finance", "إي فاينانس"),
            WatchItem::new("adib", "Abu Dhabi Islamic Bank Egypt", "مصرف أبوظبي الإسلامي"),
        ];
        write_collection(&store, "watchlist", &items).await.unwrap();

        let read: Vec<WatchItem> = read_collection(&store, "watchlist").await.unwrap();
        assert_eq!(read, items);
        assert_eq!(read[0].symbol, "EMFD"); // constructor uppercases
    }

    #[tokio::test]
    async fn corrupt_blob_is_a_deserialization_error() {
        let store = MemoryStore::new();
        store.set("watchlist", "not-json").await.unwrap();
        let err = read_collection::<WatchItem>(&store, "watchlist")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot format
// ═══════════════════════════════════════════════════════════════════

mod snapshot_format {
    use super::*;

    fn sample_map() -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("app_version".to_string(), "2.0.9".to_string());
        map.insert("holdings".to_string(), "[]".to_string());
        map
    }

    #[test]
    fn encode_starts_with_magic_and_version() {
        let bytes = encode_snapshot(&sample_map()).unwrap();
        assert_eq!(&bytes[0..4], MAGIC);
        assert_eq!(
            u16::from_le_bytes([bytes[4], bytes[5]]),
            CURRENT_VERSION
        );
        assert!(bytes.len() > HEADER_SIZE);
    }

    #[test]
    fn decode_roundtrips() {
        let map = sample_map();
        let bytes = encode_snapshot(&map).unwrap();
        assert_eq!(decode_snapshot(&bytes).unwrap(), map);
    }

    #[test]
    fn too_small_file_rejected() {
        let err = decode_snapshot(b"EGX").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshotFormat(_)));
    }

    #[test]
    fn wrong_magic_rejected() {
        let mut bytes = encode_snapshot(&sample_map()).unwrap();
        bytes[0] = b'X';
        let err = decode_snapshot(&bytes).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshotFormat(_)));
    }

    #[test]
    fn future_version_rejected() {
        let mut bytes = encode_snapshot(&sample_map()).unwrap();
        bytes[4..6].copy_from_slice(&99u16.to_le_bytes());
        let err = decode_snapshot(&bytes).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedSnapshotVersion(99)));
    }

    #[test]
    fn version_zero_rejected() {
        let mut bytes = encode_snapshot(&sample_map()).unwrap();
        bytes[4..6].copy_from_slice(&0u16.to_le_bytes());
        let err = decode_snapshot(&bytes).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedSnapshotVersion(0)));
    }

    #[test]
    fn truncated_body_rejected() {
        let bytes = encode_snapshot(&sample_map()).unwrap();
        let err = decode_snapshot(&bytes[..bytes.len() - 3]).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileStore
// ═══════════════════════════════════════════════════════════════════

mod file_store {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.egxt");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").await.unwrap(), None);
        // The file is only created on the first write.
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.egxt");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("app_version", "2.0.9").await.unwrap();
            store.set("holdings", "[]").await.unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("app_version").await.unwrap().as_deref(),
            Some("2.0.9")
        );
        assert_eq!(reopened.get("holdings").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn remove_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.egxt");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("holdings", "[]").await.unwrap();
            store.remove("holdings").await.unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("holdings").await.unwrap(), None);
    }

    #[test]
    fn corrupt_file_rejected_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.egxt");
        std::fs::write(&path, b"definitely not a snapshot").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSnapshotFormat(_)));
    }
}
