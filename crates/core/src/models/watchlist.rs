use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A symbol being watched but not (yet) held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchItem {
    /// Unique identifier
    pub id: Uuid,

    /// EGX ticker symbol, uppercased
    pub symbol: String,

    /// English company name
    pub name_en: String,

    /// Arabic company name
    pub name_ar: String,

    /// Alert price in EGP, if one is set
    #[serde(default)]
    pub target_price: Option<f64>,

    /// Optional free-text note (thesis, source, reminder)
    #[serde(default)]
    pub notes: Option<String>,

    /// When the symbol was added to the watchlist
    pub added_at: DateTime<Utc>,
}

impl WatchItem {
    pub fn new(
        symbol: impl Into<String>,
        name_en: impl Into<String>,
        name_ar: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            name_en: name_en.into(),
            name_ar: name_ar.into(),
            target_price: None,
            notes: None,
            added_at: Utc::now(),
        }
    }

    /// Attach a target price to watch for.
    #[must_use]
    pub fn with_target_price(mut self, price: f64) -> Self {
        self.target_price = Some(price);
        self
    }
}
