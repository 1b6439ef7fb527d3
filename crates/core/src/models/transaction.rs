use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a recorded trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Buy => write!(f, "buy"),
            TransactionKind::Sell => write!(f, "sell"),
        }
    }
}

/// A recorded buy or sell against a holding.
///
/// Transactions reference holdings by id, which is why they are wiped
/// together with the holdings collection on a version reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: Uuid,

    /// The holding this trade applies to
    pub holding_id: Uuid,

    /// Ticker symbol at the time of the trade (denormalized for display)
    pub symbol: String,

    /// Buy or sell
    pub kind: TransactionKind,

    /// Number of shares traded
    pub shares: u32,

    /// Price per share in EGP
    pub price: f64,

    /// Broker fees and stamp duty in EGP
    pub fees: f64,

    /// Trade date (daily granularity)
    pub date: NaiveDate,

    /// Optional free-text note
    #[serde(default)]
    pub notes: Option<String>,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        holding_id: Uuid,
        symbol: impl Into<String>,
        kind: TransactionKind,
        shares: u32,
        price: f64,
        fees: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            holding_id,
            symbol: symbol.into().to_uppercase(),
            kind,
            shares,
            price,
            fees,
            date,
            notes: None,
        }
    }

    /// Trade value before fees (shares × price).
    #[must_use]
    pub fn gross_amount(&self) -> f64 {
        f64::from(self.shares) * self.price
    }

    /// Cash actually moved: buys cost gross + fees, sells return gross − fees.
    #[must_use]
    pub fn net_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Buy => self.gross_amount() + self.fees,
            TransactionKind::Sell => self.gross_amount() - self.fees,
        }
    }
}
