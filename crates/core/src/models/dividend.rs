use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payout state of a dividend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividendStatus {
    /// Declared but not yet paid out
    Announced,
    /// Cash received
    Paid,
}

impl std::fmt::Display for DividendStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DividendStatus::Announced => write!(f, "announced"),
            DividendStatus::Paid => write!(f, "paid"),
        }
    }
}

/// A cash dividend declared on one of the tracked symbols.
///
/// Dividend records are independent of holding ids, so a version reset
/// leaves them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol the dividend was declared on
    pub symbol: String,

    /// Dividend per share in EGP
    pub amount_per_share: f64,

    /// Shares entitled to the payout
    pub shares: u32,

    /// Last day to own the share and still receive the dividend
    pub ex_date: NaiveDate,

    /// Payout date
    pub pay_date: NaiveDate,

    /// Announced or paid
    pub status: DividendStatus,
}

impl DividendRecord {
    pub fn new(
        symbol: impl Into<String>,
        amount_per_share: f64,
        shares: u32,
        ex_date: NaiveDate,
        pay_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            amount_per_share,
            shares,
            ex_date,
            pay_date,
            status: DividendStatus::Announced,
        }
    }

    /// Total payout for this record (per-share amount × shares).
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        self.amount_per_share * f64::from(self.shares)
    }
}
