use thiserror::Error;

/// Unified error type for the entire egx-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Key-Value Store ─────────────────────────────────────────────
    #[error("Storage read failed for key '{key}': {message}")]
    StorageRead {
        key: String,
        message: String,
    },

    #[error("Storage write failed for key '{key}': {message}")]
    StorageWrite {
        key: String,
        message: String,
    },

    // ── Snapshot file (native only) ─────────────────────────────────
    #[error("Invalid snapshot format: {0}")]
    InvalidSnapshotFormat(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedSnapshotVersion(u16),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Dividend record not found: {0}")]
    DividendNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<bincode::Error> for CoreError {
    fn from(e: bincode::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
