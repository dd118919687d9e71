#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::portfolio::performance::performance_service::{
        point_label, PerformanceSeriesSynthesizer,
    };
    use crate::portfolio::performance::TimeRange;

    fn fixed_now() -> chrono::DateTime<Utc> {
        // 2024-03-15 14:30:00 UTC
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn test_series_has_range_point_count() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        for range in [
            TimeRange::Day,
            TimeRange::Week,
            TimeRange::Month,
            TimeRange::Quarter,
        ] {
            let series = synthesizer.series(range, dec!(1000), dec!(100), fixed_now());
            assert_eq!(series.len(), range.point_count());
        }
    }

    #[test]
    fn test_anchor_is_exact_and_last() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        let series = synthesizer.series(TimeRange::Week, dec!(20000), dec!(5000), fixed_now());

        let anchor = series.last().unwrap();
        assert!(anchor.is_anchor);
        assert_eq!(anchor.value, dec!(25000));
        assert_eq!(anchor.profit_loss, dec!(5000));
        assert_eq!(anchor.profit_loss_percent, dec!(25));
        assert_eq!(series.iter().filter(|p| p.is_anchor).count(), 1);
    }

    #[test]
    fn test_values_clamped_to_zero_on_deep_loss() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        // Loss twice the investment: the walk would go far negative.
        let series = synthesizer.series(TimeRange::Month, dec!(1000), dec!(-2000), fixed_now());

        assert_eq!(series.len(), 30);
        for point in &series {
            assert!(point.value >= Decimal::ZERO, "negative value synthesized");
        }
        assert_eq!(series.last().unwrap().value, Decimal::ZERO);
    }

    #[test]
    fn test_pnl_change_reuses_cached_points() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        let first = synthesizer.series(TimeRange::Week, dec!(10000), dec!(500), fixed_now());
        let second = synthesizer.series(TimeRange::Week, dec!(10000), dec!(800), fixed_now());

        // Non-anchor points are byte-for-byte the cached ones.
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()).filter(|(a, _)| !a.is_anchor) {
            assert_eq!(a, b);
        }

        // Only the anchor tracked the live figures.
        let anchor = second.last().unwrap();
        assert_eq!(anchor.value, dec!(10800));
        assert_eq!(anchor.profit_loss, dec!(800));
        assert_eq!(anchor.profit_loss_percent, dec!(8));
    }

    #[test]
    fn test_range_change_regenerates() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        synthesizer.series(TimeRange::Week, dec!(10000), dec!(500), fixed_now());
        let month = synthesizer.series(TimeRange::Month, dec!(10000), dec!(500), fixed_now());

        assert_eq!(month.len(), TimeRange::Month.point_count());
        assert_eq!(month.last().unwrap().label, "Today");
    }

    #[test]
    fn test_investment_change_regenerates() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        synthesizer.series(TimeRange::Week, dec!(10000), dec!(500), fixed_now());
        let regenerated = synthesizer.series(TimeRange::Week, dec!(12000), dec!(500), fixed_now());

        // Cached points would still carry the old investment.
        for point in &regenerated {
            assert_eq!(point.investment, dec!(12000));
        }
    }

    #[test]
    fn test_zero_or_negative_investment_yields_empty_series() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        assert!(synthesizer
            .series(TimeRange::Week, Decimal::ZERO, dec!(100), fixed_now())
            .is_empty());
        assert!(synthesizer
            .series(TimeRange::Week, dec!(-50), dec!(100), fixed_now())
            .is_empty());
    }

    #[test]
    fn test_intraday_labels() {
        let now = fixed_now();
        assert_eq!(point_label(TimeRange::Day, 0, now), "Now");
        assert_eq!(point_label(TimeRange::Day, 1, now), "13:00");
        assert_eq!(point_label(TimeRange::Day, 14, now), "00:00");
        assert_eq!(point_label(TimeRange::Day, 15, now), "23:00");
    }

    #[test]
    fn test_daily_labels() {
        let now = fixed_now();
        assert_eq!(point_label(TimeRange::Week, 0, now), "Today");
        assert_eq!(point_label(TimeRange::Week, 1, now), "Yesterday");
        assert_eq!(point_label(TimeRange::Week, 2, now), "Mar 13");
        assert_eq!(point_label(TimeRange::Month, 14, now), "Mar 1");
    }

    #[test]
    fn test_series_is_oldest_first() {
        let synthesizer = PerformanceSeriesSynthesizer::new();
        let series = synthesizer.series(TimeRange::Week, dec!(1000), dec!(0), fixed_now());

        assert_eq!(series.first().unwrap().label, "Mar 9");
        assert!(!series.first().unwrap().is_anchor);
        assert_eq!(series.last().unwrap().label, "Today");
    }
}
