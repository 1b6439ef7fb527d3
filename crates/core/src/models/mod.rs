pub mod dividend;
pub mod holding;
pub mod summary;
pub mod transaction;
pub mod watchlist;
