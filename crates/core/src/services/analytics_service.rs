use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::holding::PortfolioHolding;
use crate::models::summary::{AllocationSlice, HoldingPosition, PortfolioSummary};

/// Computes portfolio analytics: gain/loss, returns, allocation breakdown.
///
/// Pure calculations over an in-memory holdings slice - no I/O, easy to
/// test. Prices are whatever the user last recorded; a never-priced
/// holding (price 0) counts toward cost but not market value.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarize a set of holdings at a given instant.
    #[must_use]
    pub fn summarize(
        &self,
        holdings: &[PortfolioHolding],
        as_of: DateTime<Utc>,
    ) -> PortfolioSummary {
        let total_cost: f64 = holdings.iter().map(PortfolioHolding::cost_value).sum();
        let market_value: f64 = holdings.iter().map(PortfolioHolding::market_value).sum();
        let unrealized_gain_loss = market_value - total_cost;
        let return_pct = if total_cost > 0.0 {
            unrealized_gain_loss / total_cost * 100.0
        } else {
            0.0
        };

        let mut positions: Vec<HoldingPosition> = holdings
            .iter()
            .map(|h| {
                let cost_value = h.cost_value();
                let value = h.market_value();
                let gain_loss = value - cost_value;
                HoldingPosition {
                    symbol: h.symbol.clone(),
                    name_en: h.name_en.clone(),
                    role: h.role,
                    status: h.status,
                    shares: h.shares,
                    avg_cost: h.avg_cost,
                    current_price: h.current_price,
                    cost_value,
                    market_value: value,
                    gain_loss,
                    return_pct: if cost_value > 0.0 {
                        gain_loss / cost_value * 100.0
                    } else {
                        0.0
                    },
                    allocation_pct: if market_value > 0.0 {
                        value / market_value * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();
        positions.sort_by(|a, b| {
            b.market_value
                .partial_cmp(&a.market_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let by_sector = Self::slices(
            holdings.iter().map(|h| (h.sector.clone(), h.market_value())),
            market_value,
        );
        let by_role = Self::slices(
            holdings
                .iter()
                .map(|h| (h.role.to_string(), h.market_value())),
            market_value,
        );

        PortfolioSummary {
            as_of,
            holding_count: holdings.len(),
            total_cost,
            market_value,
            unrealized_gain_loss,
            return_pct,
            positions,
            by_sector,
            by_role,
        }
    }

    /// Group (label, value) pairs into allocation slices, largest first.
    fn slices(
        values: impl Iterator<Item = (String, f64)>,
        total: f64,
    ) -> Vec<AllocationSlice> {
        let mut grouped: HashMap<String, f64> = HashMap::new();
        for (label, value) in values {
            *grouped.entry(label).or_insert(0.0) += value;
        }
        let mut slices: Vec<AllocationSlice> = grouped
            .into_iter()
            .map(|(label, value)| AllocationSlice {
                label,
                market_value: value,
                allocation_pct: if total > 0.0 { value / total * 100.0 } else { 0.0 },
            })
            .collect();
        slices.sort_by(|a, b| {
            b.market_value
                .partial_cmp(&a.market_value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });
        slices
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
