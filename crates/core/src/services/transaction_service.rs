use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::transaction::{Transaction, TransactionKind};
use crate::services::holdings_service::HoldingsService;
use crate::storage::{self, keys, kv::KeyValueStore};

/// Records buys and sells and keeps the referenced holding in step.
///
/// The holding update and the transaction append are two independent
/// store writes (the store has no transactions); the holding is written
/// first, so a failed append leaves the position correct but the trade
/// log one entry short.
pub struct TransactionService {
    store: Arc<dyn KeyValueStore>,
    holdings: HoldingsService,
}

impl TransactionService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let holdings = HoldingsService::new(store.clone());
        Self { store, holdings }
    }

    /// All transactions, newest trade date first.
    pub async fn list(&self) -> Result<Vec<Transaction>, CoreError> {
        let mut txs: Vec<Transaction> =
            storage::read_collection(self.store.as_ref(), keys::TRANSACTIONS_KEY).await?;
        txs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(txs)
    }

    /// Transactions for one holding, newest trade date first.
    pub async fn list_for_holding(
        &self,
        holding_id: Uuid,
    ) -> Result<Vec<Transaction>, CoreError> {
        let mut txs = self.list().await?;
        txs.retain(|t| t.holding_id == holding_id);
        Ok(txs)
    }

    /// Record a buy: appends a transaction and folds the new shares into
    /// the holding at a weighted-average cost (fees included in basis).
    pub async fn record_buy(
        &self,
        holding_id: Uuid,
        shares: u32,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        Self::validate_trade(shares, price, fees)?;
        let holding = self.holdings.get(holding_id).await?;

        let old_cost = holding.cost_value();
        let new_shares = holding.shares + shares;
        let new_avg = (old_cost + f64::from(shares) * price + fees) / f64::from(new_shares);

        self.holdings
            .modify(holding_id, |h| {
                h.shares = new_shares;
                h.avg_cost = new_avg;
            })
            .await?;

        let tx = Transaction::new(
            holding_id,
            holding.symbol,
            TransactionKind::Buy,
            shares,
            price,
            fees,
            date,
        );
        self.append(tx).await
    }

    /// Record a sell. Rejects selling more shares than the holding has;
    /// the average cost is left untouched (cost basis of remaining shares
    /// does not change on a sale).
    pub async fn record_sell(
        &self,
        holding_id: Uuid,
        shares: u32,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        Self::validate_trade(shares, price, fees)?;
        let holding = self.holdings.get(holding_id).await?;

        if shares > holding.shares {
            return Err(CoreError::ValidationError(format!(
                "Cannot sell {} {} - only {} held",
                shares, holding.symbol, holding.shares
            )));
        }

        self.holdings
            .modify(holding_id, |h| {
                h.shares -= shares;
            })
            .await?;

        let tx = Transaction::new(
            holding_id,
            holding.symbol,
            TransactionKind::Sell,
            shares,
            price,
            fees,
            date,
        );
        self.append(tx).await
    }

    /// Delete a transaction record. Bookkeeping only: the holding is not
    /// rewound.
    pub async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut txs: Vec<Transaction> =
            storage::read_collection(self.store.as_ref(), keys::TRANSACTIONS_KEY).await?;
        let before = txs.len();
        txs.retain(|t| t.id != id);
        if txs.len() == before {
            return Err(CoreError::TransactionNotFound(id.to_string()));
        }
        storage::write_collection(self.store.as_ref(), keys::TRANSACTIONS_KEY, &txs).await
    }

    async fn append(&self, tx: Transaction) -> Result<Uuid, CoreError> {
        let id = tx.id;
        let mut txs: Vec<Transaction> =
            storage::read_collection(self.store.as_ref(), keys::TRANSACTIONS_KEY).await?;
        txs.push(tx);
        storage::write_collection(self.store.as_ref(), keys::TRANSACTIONS_KEY, &txs).await?;
        debug!("recorded transaction {id}");
        Ok(id)
    }

    fn validate_trade(shares: u32, price: f64, fees: f64) -> Result<(), CoreError> {
        if shares == 0 {
            return Err(CoreError::ValidationError(
                "Trade share count must be positive".into(),
            ));
        }
        if !(price > 0.0 && price.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Trade price must be positive, got {price}"
            )));
        }
        if !(fees >= 0.0 && fees.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Fees must be non-negative, got {fees}"
            )));
        }
        Ok(())
    }
}
