use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::holding::{HoldingRole, HoldingStatus};

/// Snapshot of the whole portfolio at a point in time.
///
/// All monetary values are in EGP. Holdings that have never been priced
/// (current price 0) contribute cost but no market value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Instant this summary was computed at
    pub as_of: DateTime<Utc>,

    /// Number of positions in the portfolio
    pub holding_count: usize,

    /// Sum of cost bases (shares × average cost)
    pub total_cost: f64,

    /// Sum of market values at last recorded prices
    pub market_value: f64,

    /// market_value − total_cost
    pub unrealized_gain_loss: f64,

    /// Percentage return: (unrealized_gain_loss / total_cost) × 100
    pub return_pct: f64,

    /// Per-position breakdown, largest market value first
    pub positions: Vec<HoldingPosition>,

    /// Allocation by sector label, largest slice first
    pub by_sector: Vec<AllocationSlice>,

    /// Allocation by strategy role, largest slice first
    pub by_role: Vec<AllocationSlice>,
}

/// Summary of a single position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldingPosition {
    pub symbol: String,
    pub name_en: String,
    pub role: HoldingRole,
    pub status: HoldingStatus,
    pub shares: u32,
    pub avg_cost: f64,
    pub current_price: f64,

    /// shares × average cost
    pub cost_value: f64,

    /// shares × current price
    pub market_value: f64,

    /// market_value − cost_value
    pub gain_loss: f64,

    /// Percentage return on this position
    pub return_pct: f64,

    /// This position's share of total market value × 100
    pub allocation_pct: f64,
}

/// One slice of an allocation breakdown (by sector or by role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Sector label or role name
    pub label: String,

    /// Combined market value of the slice
    pub market_value: f64,

    /// Slice's share of total market value × 100
    pub allocation_pct: f64,
}
