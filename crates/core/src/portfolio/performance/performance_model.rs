use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Chart time ranges offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    /// Trailing 24 hours, one point per hour.
    Day,
    /// Trailing 7 days, one point per day.
    Week,
    /// Trailing 30 days, one point per day.
    Month,
    /// Trailing 90 days, one point per day.
    Quarter,
}

impl TimeRange {
    /// Number of synthesized points for this range.
    pub fn point_count(&self) -> usize {
        match self {
            TimeRange::Day => 24,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
        }
    }

    /// True for ranges labeled with times of day rather than dates.
    pub fn is_intraday(&self) -> bool {
        matches!(self, TimeRange::Day)
    }

    /// Relative scale of the synthetic noise. Intraday is deliberately
    /// noisier so short horizons look volatile.
    pub fn volatility_base(&self) -> Decimal {
        if self.is_intraday() {
            dec!(0.05)
        } else {
            dec!(0.01)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "1d",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
        }
    }
}

/// One point of the synthesized performance series.
///
/// Points are ordered oldest first. The chronologically last point is
/// the anchor: it carries the exact live portfolio figures at generation
/// time, while every earlier point is simulated history - no real
/// valuation snapshots are stored by this subsystem.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub label: String,
    pub value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
    pub investment: Decimal,
    pub is_anchor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_counts() {
        assert_eq!(TimeRange::Day.point_count(), 24);
        assert_eq!(TimeRange::Week.point_count(), 7);
        assert_eq!(TimeRange::Month.point_count(), 30);
        assert_eq!(TimeRange::Quarter.point_count(), 90);
    }

    #[test]
    fn test_intraday_is_noisier() {
        assert!(TimeRange::Day.volatility_base() > TimeRange::Week.volatility_base());
        assert!(TimeRange::Day.is_intraday());
        assert!(!TimeRange::Quarter.is_intraday());
    }
}
