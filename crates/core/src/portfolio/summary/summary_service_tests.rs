#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::portfolio::holdings::holdings_model::{AggregatedHolding, DisplayMeta};
    use crate::portfolio::summary::summary_model::PortfolioSnapshot;
    use crate::portfolio::summary::summary_service::summarize;

    fn aggregated(
        asset_id: &str,
        cost_basis: Decimal,
        current_value: Decimal,
    ) -> AggregatedHolding {
        AggregatedHolding {
            asset_id: asset_id.to_string(),
            quantity: dec!(1),
            cost_basis,
            display: DisplayMeta::default(),
            current_price: current_value,
            change_percent_24h: Decimal::ZERO,
            current_value,
            profit_loss: current_value - cost_basis,
            profit_loss_percent: Decimal::ZERO,
            is_live_price: true,
            priced_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_summary_totals() {
        let holdings = vec![
            aggregated("bitcoin", dec!(20000), dec!(25000)),
            aggregated("ethereum", dec!(5000), dec!(4000)),
        ];

        let snapshot = summarize(&holdings, dec!(500));

        assert_eq!(snapshot.holdings_value, dec!(29000));
        assert_eq!(snapshot.total_value, dec!(29500));
        assert_eq!(snapshot.cash_balance, dec!(500));
        assert_eq!(snapshot.total_investment, dec!(25000));
        assert_eq!(snapshot.total_profit_loss, dec!(4000));
        assert_eq!(snapshot.total_profit_loss_percent, dec!(16));
    }

    #[test]
    fn test_zero_investment_yields_zero_percent() {
        let holdings = vec![aggregated("bitcoin", Decimal::ZERO, dec!(100))];

        let snapshot = summarize(&holdings, Decimal::ZERO);

        assert_eq!(snapshot.total_profit_loss, dec!(100));
        assert_eq!(snapshot.total_profit_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn test_no_holdings_is_cash_only() {
        let snapshot = summarize(&[], dec!(750));

        assert_eq!(snapshot.total_value, dec!(750));
        assert_eq!(snapshot.holdings_value, Decimal::ZERO);
        assert_eq!(snapshot.total_investment, Decimal::ZERO);
        assert_eq!(snapshot.total_profit_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn test_empty_snapshot_is_all_zeros() {
        let snapshot = PortfolioSnapshot::empty();
        assert_eq!(snapshot.total_value, Decimal::ZERO);
        assert_eq!(snapshot.total_investment, Decimal::ZERO);
        assert_eq!(snapshot.total_profit_loss, Decimal::ZERO);
    }
}
