pub mod analytics_service;
pub mod bootstrap_service;
pub mod dividend_service;
pub mod holdings_service;
pub mod transaction_service;
pub mod watchlist_service;
