use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::{HoldingStatus, PortfolioHolding};
use crate::storage::{self, keys, kv::KeyValueStore};

/// CRUD over the holdings collection.
///
/// The store is the single authority: every operation is a
/// read-modify-write of the whole collection under one key, the same way
/// the mobile frontend persisted it.
pub struct HoldingsService {
    store: Arc<dyn KeyValueStore>,
}

impl HoldingsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All holdings in stored order.
    pub async fn list(&self) -> Result<Vec<PortfolioHolding>, CoreError> {
        storage::read_collection(self.store.as_ref(), keys::HOLDINGS_KEY).await
    }

    /// Get a single holding by id.
    pub async fn get(&self, id: Uuid) -> Result<PortfolioHolding, CoreError> {
        self.list()
            .await?
            .into_iter()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))
    }

    /// Look a holding up by symbol (case-insensitive).
    pub async fn find_by_symbol(
        &self,
        symbol: &str,
    ) -> Result<Option<PortfolioHolding>, CoreError> {
        let upper = symbol.to_uppercase();
        Ok(self.list().await?.into_iter().find(|h| h.symbol == upper))
    }

    /// Add a new holding. Symbols must be unique within the collection.
    pub async fn add(&self, holding: PortfolioHolding) -> Result<Uuid, CoreError> {
        Self::validate(&holding)?;

        let mut holdings = self.list().await?;
        if holdings.iter().any(|h| h.symbol == holding.symbol) {
            return Err(CoreError::ValidationError(format!(
                "Holding for {} already exists",
                holding.symbol
            )));
        }

        let id = holding.id;
        holdings.push(holding);
        storage::write_collection(self.store.as_ref(), keys::HOLDINGS_KEY, &holdings).await?;
        debug!("added holding {id}");
        Ok(id)
    }

    /// Record a manually observed market price for a holding.
    pub async fn update_price(&self, id: Uuid, price: f64) -> Result<(), CoreError> {
        if !(price >= 0.0 && price.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Price must be a non-negative number, got {price}"
            )));
        }
        self.modify(id, |h| {
            h.current_price = price;
        })
        .await
    }

    /// Overwrite the share count and average cost of a holding
    /// (manual correction, not a trade).
    pub async fn update_position(
        &self,
        id: Uuid,
        shares: u32,
        avg_cost: f64,
    ) -> Result<(), CoreError> {
        if shares == 0 {
            return Err(CoreError::ValidationError(
                "Share count must be positive".into(),
            ));
        }
        if !(avg_cost > 0.0 && avg_cost.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Average cost must be positive, got {avg_cost}"
            )));
        }
        self.modify(id, |h| {
            h.shares = shares;
            h.avg_cost = avg_cost;
        })
        .await
    }

    /// Change the stance on a holding (hold / reduce / exit).
    pub async fn update_status(&self, id: Uuid, status: HoldingStatus) -> Result<(), CoreError> {
        self.modify(id, |h| {
            h.status = status;
        })
        .await
    }

    /// Remove a holding by id.
    pub async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut holdings = self.list().await?;
        let before = holdings.len();
        holdings.retain(|h| h.id != id);
        if holdings.len() == before {
            return Err(CoreError::HoldingNotFound(id.to_string()));
        }
        storage::write_collection(self.store.as_ref(), keys::HOLDINGS_KEY, &holdings).await
    }

    /// Apply `f` to the holding with the given id, stamp `updated_at`,
    /// and write the collection back.
    pub(crate) async fn modify(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut PortfolioHolding),
    ) -> Result<(), CoreError> {
        let mut holdings = self.list().await?;
        let holding = holdings
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;
        f(holding);
        holding.updated_at = Utc::now();
        storage::write_collection(self.store.as_ref(), keys::HOLDINGS_KEY, &holdings).await
    }

    /// Validate a holding before it enters the collection.
    fn validate(holding: &PortfolioHolding) -> Result<(), CoreError> {
        let symbol = &holding.symbol;
        if !(2..=5).contains(&symbol.len())
            || !symbol.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(CoreError::ValidationError(format!(
                "Invalid symbol '{symbol}': must be 2-5 uppercase letters"
            )));
        }
        if holding.shares == 0 {
            return Err(CoreError::ValidationError(
                "Share count must be positive".into(),
            ));
        }
        if !(holding.avg_cost > 0.0 && holding.avg_cost.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Average cost must be positive, got {}",
                holding.avg_cost
            )));
        }
        if !(holding.current_price >= 0.0 && holding.current_price.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Price must be a non-negative number, got {}",
                holding.current_price
            )));
        }
        Ok(())
    }
}
