//! Portfolio summary: fold per-asset aggregates into one snapshot.

use chrono::Utc;
use rust_decimal::Decimal;

use super::summary_model::PortfolioSnapshot;
use crate::constants::{DECIMAL_PRECISION, PERCENT_PRECISION};
use crate::portfolio::holdings::AggregatedHolding;

/// Fold the aggregated holdings and cash balance into a portfolio
/// snapshot.
///
/// Pure function, no side effects. A zero total investment yields a
/// zero percentage, never a division error.
pub fn summarize(aggregated: &[AggregatedHolding], cash_balance: Decimal) -> PortfolioSnapshot {
    let holdings_value: Decimal = aggregated.iter().map(|h| h.current_value).sum();
    let total_investment: Decimal = aggregated.iter().map(|h| h.cost_basis).sum();
    let total_profit_loss: Decimal = aggregated.iter().map(|h| h.profit_loss).sum();

    let total_profit_loss_percent = if total_investment > Decimal::ZERO {
        (total_profit_loss / total_investment * Decimal::ONE_HUNDRED).round_dp(PERCENT_PRECISION)
    } else {
        Decimal::ZERO
    };

    PortfolioSnapshot {
        total_value: (cash_balance + holdings_value).round_dp(DECIMAL_PRECISION),
        holdings_value: holdings_value.round_dp(DECIMAL_PRECISION),
        cash_balance,
        total_investment: total_investment.round_dp(DECIMAL_PRECISION),
        total_profit_loss: total_profit_loss.round_dp(DECIMAL_PRECISION),
        total_profit_loss_percent,
        as_of: Utc::now(),
    }
}
