pub mod errors;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

use errors::CoreError;
use models::{
    dividend::DividendRecord,
    holding::{HoldingRole, HoldingStatus, PortfolioHolding},
    summary::PortfolioSummary,
    transaction::Transaction,
    watchlist::WatchItem,
};
use seed::SeedStockEntry;
use services::{
    analytics_service::AnalyticsService,
    bootstrap_service::{BootstrapOutcome, BootstrapService},
    dividend_service::DividendService, holdings_service::HoldingsService,
    transaction_service::TransactionService, watchlist_service::WatchlistService,
};
use storage::kv::KeyValueStore;

/// Version string of the running build, recorded in storage by the
/// startup gate. Changing it triggers a reseed on the next launch.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main entry point for the EGX Tracker core library.
///
/// Owns the key-value store handle and the services that operate on it.
/// The store is the single source of truth; the facade holds no portfolio
/// state of its own.
#[must_use]
pub struct EgxTracker {
    store: Arc<dyn KeyValueStore>,
    bootstrap: BootstrapService,
    holdings: HoldingsService,
    transactions: TransactionService,
    dividends: DividendService,
    watchlist: WatchlistService,
    analytics: AnalyticsService,
    version: String,
}

impl std::fmt::Debug for EgxTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EgxTracker")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl EgxTracker {
    /// Build a tracker over `store`, gating on the crate's own
    /// [`APP_VERSION`] and the built-in seed portfolio.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_version(store, APP_VERSION, seed::SEED_PORTFOLIO.to_vec())
    }

    /// Build a tracker with an explicit running version and seed list
    /// (embedders and tests).
    pub fn with_version(
        store: Arc<dyn KeyValueStore>,
        version: impl Into<String>,
        seed: Vec<SeedStockEntry>,
    ) -> Self {
        let version = version.into();
        let bootstrap = BootstrapService::with_seed(store.clone(), version.clone(), seed);
        Self {
            bootstrap,
            holdings: HoldingsService::new(store.clone()),
            transactions: TransactionService::new(store.clone()),
            dividends: DividendService::new(store.clone()),
            watchlist: WatchlistService::new(store.clone()),
            analytics: AnalyticsService::new(),
            store,
            version,
        }
    }

    /// The version string this tracker gates on.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Direct access to the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    // ── Startup ─────────────────────────────────────────────────────

    /// Run the version-gated reset before showing any UI.
    ///
    /// Best-effort: storage failures are logged and swallowed so startup
    /// always proceeds; a failed reset retries on the next launch.
    pub async fn initialize(&self) {
        self.bootstrap.run_at_startup().await;
    }

    /// The underlying gate, for callers that want the outcome or error.
    pub async fn check_storage_version(&self) -> Result<BootstrapOutcome, CoreError> {
        self.bootstrap.check_and_reset_if_needed().await
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// All holdings in stored order.
    pub async fn get_holdings(&self) -> Result<Vec<PortfolioHolding>, CoreError> {
        self.holdings.list().await
    }

    /// Get a single holding by id.
    pub async fn get_holding(&self, id: Uuid) -> Result<PortfolioHolding, CoreError> {
        self.holdings.get(id).await
    }

    /// Look a holding up by symbol (case-insensitive).
    pub async fn find_holding(&self, symbol: &str) -> Result<Option<PortfolioHolding>, CoreError> {
        self.holdings.find_by_symbol(symbol).await
    }

    /// Add a new holding to the portfolio.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_holding(
        &self,
        symbol: impl Into<String>,
        name_en: impl Into<String>,
        name_ar: impl Into<String>,
        shares: u32,
        avg_cost: f64,
        sector: impl Into<String>,
        role: HoldingRole,
    ) -> Result<Uuid, CoreError> {
        let holding =
            PortfolioHolding::new(symbol, name_en, name_ar, shares, avg_cost, sector, role);
        self.holdings.add(holding).await
    }

    /// Record a manually observed market price.
    pub async fn update_holding_price(&self, id: Uuid, price: f64) -> Result<(), CoreError> {
        self.holdings.update_price(id, price).await
    }

    /// Correct the share count and average cost of a holding.
    pub async fn update_holding_position(
        &self,
        id: Uuid,
        shares: u32,
        avg_cost: f64,
    ) -> Result<(), CoreError> {
        self.holdings.update_position(id, shares, avg_cost).await
    }

    /// Change the stance on a holding (hold / reduce / exit).
    pub async fn update_holding_status(
        &self,
        id: Uuid,
        status: HoldingStatus,
    ) -> Result<(), CoreError> {
        self.holdings.update_status(id, status).await
    }

    /// Remove a holding by id.
    pub async fn remove_holding(&self, id: Uuid) -> Result<(), CoreError> {
        self.holdings.remove(id).await
    }

    // ── Transactions ────────────────────────────────────────────────

    /// All transactions, newest trade date first.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.transactions.list().await
    }

    /// Transactions for one holding, newest trade date first.
    pub async fn get_transactions_for_holding(
        &self,
        holding_id: Uuid,
    ) -> Result<Vec<Transaction>, CoreError> {
        self.transactions.list_for_holding(holding_id).await
    }

    /// Record a buy against a holding.
    pub async fn record_buy(
        &self,
        holding_id: Uuid,
        shares: u32,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        self.transactions
            .record_buy(holding_id, shares, price, fees, date)
            .await
    }

    /// Record a sell against a holding.
    pub async fn record_sell(
        &self,
        holding_id: Uuid,
        shares: u32,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        self.transactions
            .record_sell(holding_id, shares, price, fees, date)
            .await
    }

    /// Delete a transaction record (the holding is not rewound).
    pub async fn remove_transaction(&self, id: Uuid) -> Result<(), CoreError> {
        self.transactions.remove(id).await
    }

    // ── Dividends ───────────────────────────────────────────────────

    /// All dividend records, most recent pay date first.
    pub async fn get_dividends(&self) -> Result<Vec<DividendRecord>, CoreError> {
        self.dividends.list().await
    }

    /// Dividend records for one symbol.
    pub async fn get_dividends_for_symbol(
        &self,
        symbol: &str,
    ) -> Result<Vec<DividendRecord>, CoreError> {
        self.dividends.list_for_symbol(symbol).await
    }

    /// Record a declared dividend.
    pub async fn record_dividend(&self, record: DividendRecord) -> Result<Uuid, CoreError> {
        self.dividends.record(record).await
    }

    /// Mark an announced dividend as paid.
    pub async fn mark_dividend_paid(&self, id: Uuid) -> Result<(), CoreError> {
        self.dividends.mark_paid(id).await
    }

    /// Remove a dividend record.
    pub async fn remove_dividend(&self, id: Uuid) -> Result<(), CoreError> {
        self.dividends.remove(id).await
    }

    /// Total cash received across all paid dividends.
    pub async fn dividend_income(&self) -> Result<f64, CoreError> {
        self.dividends.total_income().await
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// All watched symbols, newest first.
    pub async fn get_watchlist(&self) -> Result<Vec<WatchItem>, CoreError> {
        self.watchlist.list().await
    }

    /// Add a symbol to the watchlist (deduped by symbol).
    pub async fn watch(&self, item: WatchItem) -> Result<(), CoreError> {
        self.watchlist.add(item).await
    }

    /// Remove a symbol from the watchlist.
    /// Returns `false` if the symbol was not being watched.
    pub async fn unwatch(&self, symbol: &str) -> Result<bool, CoreError> {
        self.watchlist.remove(symbol).await
    }

    /// Whether a symbol is on the watchlist.
    pub async fn is_watching(&self, symbol: &str) -> Result<bool, CoreError> {
        self.watchlist.contains(symbol).await
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Summarize the current portfolio: totals, per-position gain/loss,
    /// and allocation by sector and role.
    pub async fn get_portfolio_summary(&self) -> Result<PortfolioSummary, CoreError> {
        let holdings = self.holdings.list().await?;
        Ok(self.analytics.summarize(&holdings, Utc::now()))
    }
}
