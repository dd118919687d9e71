use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level figures folded from the aggregated holdings and the
/// cash balance.
///
/// Always a pure function of current inputs: recomputed synchronously
/// whenever either changes, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Cash plus the market value of all holdings.
    pub total_value: Decimal,
    /// Market value of the holdings alone.
    pub holdings_value: Decimal,
    pub cash_balance: Decimal,
    /// Sum of remaining cost bases.
    pub total_investment: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_percent: Decimal,
    pub as_of: DateTime<Utc>,
}

impl PortfolioSnapshot {
    /// The zero-state shown before any holdings or cash are known. The
    /// presentation layer renders this as an empty state.
    pub fn empty() -> Self {
        Self {
            total_value: Decimal::ZERO,
            holdings_value: Decimal::ZERO,
            cash_balance: Decimal::ZERO,
            total_investment: Decimal::ZERO,
            total_profit_loss: Decimal::ZERO,
            total_profit_loss_percent: Decimal::ZERO,
            as_of: Utc::now(),
        }
    }
}
