//! Holdings aggregation: merge static holdings with the latest observed
//! prices.

use std::collections::HashMap;

use rust_decimal::Decimal;

use coinfolio_market_feed::PriceUpdate;

use super::holdings_model::{AggregatedHolding, Holding};
use crate::constants::{DECIMAL_PRECISION, PERCENT_PRECISION};

/// Combine holdings with the latest price per asset.
///
/// Pure function of its inputs. A holding whose asset has never been
/// observed on the feed keeps its static fallback price fields, so a
/// cold price cache degrades to the account-snapshot prices instead of
/// failing. The output is sorted descending by current value; the sort
/// is stable, so equal values keep their input order.
pub fn aggregate_holdings(
    holdings: &[Holding],
    prices: &HashMap<String, PriceUpdate>,
) -> Vec<AggregatedHolding> {
    let mut aggregated: Vec<AggregatedHolding> = holdings
        .iter()
        .map(|holding| aggregate_one(holding, prices.get(&holding.asset_id)))
        .collect();

    aggregated.sort_by(|a, b| b.current_value.cmp(&a.current_value));
    aggregated
}

fn aggregate_one(holding: &Holding, update: Option<&PriceUpdate>) -> AggregatedHolding {
    let (current_price, change_percent_24h, is_live_price, priced_at) = match update {
        Some(update) => (
            update.price,
            update.change_percent_24h,
            true,
            Some(update.observed_at),
        ),
        None => (
            holding.last_price,
            holding.change_percent_24h,
            false,
            None,
        ),
    };

    let current_value = (holding.quantity * current_price).round_dp(DECIMAL_PRECISION);
    let profit_loss = (current_value - holding.cost_basis).round_dp(DECIMAL_PRECISION);
    let profit_loss_percent = if holding.cost_basis > Decimal::ZERO {
        (profit_loss / holding.cost_basis * Decimal::ONE_HUNDRED).round_dp(PERCENT_PRECISION)
    } else {
        Decimal::ZERO
    };

    AggregatedHolding {
        asset_id: holding.asset_id.clone(),
        quantity: holding.quantity,
        cost_basis: holding.cost_basis,
        display: holding.display.clone(),
        current_price,
        change_percent_24h,
        current_value,
        profit_loss,
        profit_loss_percent,
        is_live_price,
        priced_at,
    }
}
