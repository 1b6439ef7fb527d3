use std::sync::Arc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::dividend::{DividendRecord, DividendStatus};
use crate::storage::{self, keys, kv::KeyValueStore};

/// Tracks declared and paid dividends per symbol.
///
/// Dividend records carry their own symbol and are never cleared by a
/// version reset.
pub struct DividendService {
    store: Arc<dyn KeyValueStore>,
}

impl DividendService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// All dividend records, most recent pay date first.
    pub async fn list(&self) -> Result<Vec<DividendRecord>, CoreError> {
        let mut records: Vec<DividendRecord> =
            storage::read_collection(self.store.as_ref(), keys::DIVIDENDS_KEY).await?;
        records.sort_by(|a, b| b.pay_date.cmp(&a.pay_date));
        Ok(records)
    }

    /// Records for a single symbol (case-insensitive), most recent first.
    pub async fn list_for_symbol(&self, symbol: &str) -> Result<Vec<DividendRecord>, CoreError> {
        let upper = symbol.to_uppercase();
        let mut records = self.list().await?;
        records.retain(|r| r.symbol == upper);
        Ok(records)
    }

    /// Add a dividend record.
    pub async fn record(&self, record: DividendRecord) -> Result<Uuid, CoreError> {
        if !(record.amount_per_share > 0.0 && record.amount_per_share.is_finite()) {
            return Err(CoreError::ValidationError(format!(
                "Dividend per share must be positive, got {}",
                record.amount_per_share
            )));
        }
        if record.shares == 0 {
            return Err(CoreError::ValidationError(
                "Dividend share count must be positive".into(),
            ));
        }
        if record.pay_date < record.ex_date {
            return Err(CoreError::ValidationError(format!(
                "Pay date {} is before ex date {}",
                record.pay_date, record.ex_date
            )));
        }

        let id = record.id;
        let mut records: Vec<DividendRecord> =
            storage::read_collection(self.store.as_ref(), keys::DIVIDENDS_KEY).await?;
        records.push(record);
        storage::write_collection(self.store.as_ref(), keys::DIVIDENDS_KEY, &records).await?;
        Ok(id)
    }

    /// Mark an announced dividend as paid.
    pub async fn mark_paid(&self, id: Uuid) -> Result<(), CoreError> {
        let mut records: Vec<DividendRecord> =
            storage::read_collection(self.store.as_ref(), keys::DIVIDENDS_KEY).await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CoreError::DividendNotFound(id.to_string()))?;
        record.status = DividendStatus::Paid;
        storage::write_collection(self.store.as_ref(), keys::DIVIDENDS_KEY, &records).await
    }

    /// Remove a dividend record by id.
    pub async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut records: Vec<DividendRecord> =
            storage::read_collection(self.store.as_ref(), keys::DIVIDENDS_KEY).await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(CoreError::DividendNotFound(id.to_string()));
        }
        storage::write_collection(self.store.as_ref(), keys::DIVIDENDS_KEY, &records).await
    }

    /// Total cash received across all paid records.
    pub async fn total_income(&self) -> Result<f64, CoreError> {
        Ok(self
            .list()
            .await?
            .iter()
            .filter(|r| r.status == DividendStatus::Paid)
            .map(DividendRecord::total_amount)
            .sum())
    }

    /// Total cash received from one symbol's paid records.
    pub async fn income_for_symbol(&self, symbol: &str) -> Result<f64, CoreError> {
        Ok(self
            .list_for_symbol(symbol)
            .await?
            .iter()
            .filter(|r| r.status == DividendStatus::Paid)
            .map(DividendRecord::total_amount)
            .sum())
    }
}
