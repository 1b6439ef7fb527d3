use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::seed::SeedStockEntry;

/// The role a position plays in the portfolio strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldingRole {
    /// Long-term anchor positions
    Core,
    /// Higher-risk bets, sized small
    Speculative,
    /// Held primarily for dividend income
    Income,
    /// Held for capital appreciation
    Growth,
}

impl std::fmt::Display for HoldingRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldingRole::Core => write!(f, "core"),
            HoldingRole::Speculative => write!(f, "speculative"),
            HoldingRole::Income => write!(f, "income"),
            HoldingRole::Growth => write!(f, "growth"),
        }
    }
}

/// Current stance on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldingStatus {
    /// Keep the position as-is
    Hold,
    /// Trim the position on strength
    Reduce,
    /// Close the position out
    Exit,
}

impl std::fmt::Display for HoldingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldingStatus::Hold => write!(f, "hold"),
            HoldingStatus::Reduce => write!(f, "reduce"),
            HoldingStatus::Exit => write!(f, "exit"),
        }
    }
}

/// A single position in the portfolio.
///
/// Prices are entered manually (there is no market-data feed);
/// `current_price` stays at 0 until the user records one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioHolding {
    /// Unique identifier
    pub id: Uuid,

    /// EGX ticker symbol, uppercased (e.g., "COMI", "SWDY")
    pub symbol: String,

    /// English company name
    pub name_en: String,

    /// Arabic company name
    pub name_ar: String,

    /// Number of shares held
    pub shares: u32,

    /// Average cost per share in EGP
    pub avg_cost: f64,

    /// Last recorded market price per share in EGP (0 = not yet priced)
    pub current_price: f64,

    /// Free-text sector label (e.g., "Banking", "Real Estate")
    pub sector: String,

    /// Strategy role of the position
    pub role: HoldingRole,

    /// Current stance on the position
    pub status: HoldingStatus,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// When this record was last modified
    pub updated_at: DateTime<Utc>,
}

impl PortfolioHolding {
    pub fn new(
        symbol: impl Into<String>,
        name_en: impl Into<String>,
        name_ar: impl Into<String>,
        shares: u32,
        avg_cost: f64,
        sector: impl Into<String>,
        role: HoldingRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            name_en: name_en.into(),
            name_ar: name_ar.into(),
            shares,
            avg_cost,
            current_price: 0.0,
            sector: sector.into(),
            role,
            status: HoldingStatus::Hold,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a fresh holding from a seed entry at the given instant.
    /// The id is newly generated and the price starts at 0.
    pub fn from_seed(entry: &SeedStockEntry, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: entry.symbol.to_string(),
            name_en: entry.name_en.to_string(),
            name_ar: entry.name_ar.to_string(),
            shares: entry.shares,
            avg_cost: entry.avg_cost,
            current_price: 0.0,
            sector: entry.sector.to_string(),
            role: entry.role,
            status: entry.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total cost basis of the position (shares × average cost).
    #[must_use]
    pub fn cost_value(&self) -> f64 {
        f64::from(self.shares) * self.avg_cost
    }

    /// Market value at the last recorded price (0 if never priced).
    #[must_use]
    pub fn market_value(&self) -> f64 {
        f64::from(self.shares) * self.current_price
    }
}
