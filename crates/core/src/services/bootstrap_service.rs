use chrono::Utc;
use log::{debug, error, warn};
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::holding::PortfolioHolding;
use crate::seed::SeedStockEntry;
use crate::storage::{self, keys, kv::KeyValueStore};

/// What a startup check ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Stored version matched the running version; storage untouched.
    UpToDate,
    /// Version mismatch (or fresh install): holdings reseeded,
    /// transactions cleared, version marker updated.
    Reseeded,
}

/// Owns the version-check gate that runs once at startup.
///
/// When the running application version differs from the version recorded
/// in storage (including a fresh install, where none is recorded), the
/// holdings and transactions collections are wiped and holdings are
/// repopulated from the seed list. Dividends and the watchlist are left
/// alone; they do not reference holding ids.
pub struct BootstrapService {
    store: Arc<dyn KeyValueStore>,
    seed: Vec<SeedStockEntry>,
    version: String,
}

impl BootstrapService {
    /// Gate on `version` with the built-in seed portfolio.
    pub fn new(store: Arc<dyn KeyValueStore>, version: impl Into<String>) -> Self {
        Self::with_seed(store, version, crate::seed::SEED_PORTFOLIO.to_vec())
    }

    /// Gate on `version` with a caller-supplied seed list.
    pub fn with_seed(
        store: Arc<dyn KeyValueStore>,
        version: impl Into<String>,
        seed: Vec<SeedStockEntry>,
    ) -> Self {
        Self {
            store,
            seed,
            version: version.into(),
        }
    }

    /// Startup entry point: best-effort, never fails.
    ///
    /// Any storage error is logged and swallowed so the app proceeds to
    /// its UI regardless. Because the version marker is only written after
    /// a successful reset, a failed attempt is retried on the next launch.
    pub async fn run_at_startup(&self) {
        match self.check_and_reset_if_needed().await {
            Ok(BootstrapOutcome::UpToDate) => {
                debug!("storage already at version {}", self.version);
            }
            Ok(BootstrapOutcome::Reseeded) => {
                debug!(
                    "storage reseeded with {} holdings at version {}",
                    self.seed.len(),
                    self.version
                );
            }
            Err(e) => {
                error!("startup storage reset failed (will retry next launch): {e}");
            }
        }
    }

    /// Compare the stored version marker against the running version and
    /// reseed if they differ. An absent marker counts as a mismatch.
    ///
    /// The version marker is written only after [`reset`](Self::reset)
    /// succeeds, so a crash or write failure mid-reset leaves the marker
    /// stale and the whole reset is redone on the next call.
    pub async fn check_and_reset_if_needed(&self) -> Result<BootstrapOutcome, CoreError> {
        let stored = self.store.get(keys::APP_VERSION_KEY).await?;
        if stored.as_deref() == Some(self.version.as_str()) {
            return Ok(BootstrapOutcome::UpToDate);
        }

        warn!(
            "stored version {:?} != running version {:?}, reseeding portfolio",
            stored, self.version
        );
        self.reset().await?;
        self.store
            .set(keys::APP_VERSION_KEY, &self.version)
            .await?;
        Ok(BootstrapOutcome::Reseeded)
    }

    /// Wipe holdings and transactions, then write one fresh holding per
    /// seed entry in a single store call.
    ///
    /// Every generated holding gets a new id, a zeroed current price, and
    /// both timestamps set to the same instant. Repeated calls produce the
    /// same content (symbols, shares, cost bases) with fresh identities.
    pub async fn reset(&self) -> Result<(), CoreError> {
        self.store.remove(keys::HOLDINGS_KEY).await?;
        self.store.remove(keys::TRANSACTIONS_KEY).await?;

        let now = Utc::now();
        let holdings: Vec<PortfolioHolding> = self
            .seed
            .iter()
            .map(|entry| PortfolioHolding::from_seed(entry, now))
            .collect();

        storage::write_collection(self.store.as_ref(), keys::HOLDINGS_KEY, &holdings).await
    }
}
