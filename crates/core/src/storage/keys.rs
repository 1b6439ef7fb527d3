//! Well-known keys of the on-device key-value store.
//!
//! Values are JSON strings; collections are serialized as a single blob
//! per key, mirroring how the mobile frontend persisted them.

/// Last application version that successfully initialized storage.
/// Absent on a fresh install.
pub const APP_VERSION_KEY: &str = "app_version";

/// The holdings collection (`Vec<PortfolioHolding>`).
pub const HOLDINGS_KEY: &str = "holdings";

/// The transactions collection (`Vec<Transaction>`).
pub const TRANSACTIONS_KEY: &str = "transactions";

/// The dividend records collection (`Vec<DividendRecord>`).
/// Not touched by a version reset.
pub const DIVIDENDS_KEY: &str = "dividends";

/// The watchlist collection (`Vec<WatchItem>`).
/// Not touched by a version reset.
pub const WATCHLIST_KEY: &str = "watchlist";
