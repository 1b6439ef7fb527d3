use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::watchlist::WatchItem;
use crate::storage::{self, keys, kv::KeyValueStore};

/// Maintains the watchlist: symbols of interest that are not (yet) held.
pub struct WatchlistService {
    store: Arc<dyn KeyValueStore>,
}

impl WatchlistService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All watched symbols, newest first.
    pub async fn list(&self) -> Result<Vec<WatchItem>, CoreError> {
        let mut items: Vec<WatchItem> =
            storage::read_collection(self.store.as_ref(), keys::WATCHLIST_KEY).await?;
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(items)
    }

    /// Add a symbol to the watchlist. Each symbol appears at most once.
    pub async fn add(&self, item: WatchItem) -> Result<(), CoreError> {
        if let Some(price) = item.target_price {
            if !(price > 0.0 && price.is_finite()) {
                return Err(CoreError::ValidationError(format!(
                    "Target price must be positive, got {price}"
                )));
            }
        }

        let mut items: Vec<WatchItem> =
            storage::read_collection(self.store.as_ref(), keys::WATCHLIST_KEY).await?;
        if items.iter().any(|w| w.symbol == item.symbol) {
            return Err(CoreError::ValidationError(format!(
                "{} is already on the watchlist",
                item.symbol
            )));
        }
        items.push(item);
        storage::write_collection(self.store.as_ref(), keys::WATCHLIST_KEY, &items).await
    }

    /// Remove a symbol from the watchlist.
    /// Returns `false` if the symbol was not being watched.
    pub async fn remove(&self, symbol: &str) -> Result<bool, CoreError> {
        let upper = symbol.to_uppercase();
        let mut items: Vec<WatchItem> =
            storage::read_collection(self.store.as_ref(), keys::WATCHLIST_KEY).await?;
        let before = items.len();
        items.retain(|w| w.symbol != upper);
        if items.len() == before {
            return Ok(false);
        }
        storage::write_collection(self.store.as_ref(), keys::WATCHLIST_KEY, &items).await?;
        Ok(true)
    }

    /// Whether a symbol is currently on the watchlist.
    pub async fn contains(&self, symbol: &str) -> Result<bool, CoreError> {
        let upper = symbol.to_uppercase();
        Ok(self.list().await?.iter().any(|w| w.symbol == upper))
    }
}
