//! Performance series synthesis.
//!
//! No historical valuation snapshots are stored by this subsystem, so
//! the performance chart is synthesized: a randomized backward walk that
//! starts near break-even and ends exactly at the live portfolio value.
//! Everything before the anchor is simulated, non-authoritative data and
//! callers must present it as such; a stored snapshot history would
//! replace this module wholesale.
//!
//! The cache realizes the no-wiggle rule: points are regenerated only
//! when the range or the invested amount changes, never on ordinary P&L
//! fluctuation from price ticks. The chart shape therefore stays stable
//! across ticks while the anchor point alone tracks the live value.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::performance_model::{SeriesPoint, TimeRange};
use crate::constants::{DECIMAL_PRECISION, PERCENT_PRECISION};

struct CachedSeries {
    range: TimeRange,
    total_investment: Decimal,
    points: Vec<SeriesPoint>,
}

/// Synthesizes and caches the performance series.
///
/// Single writer: the cache sits behind a mutex and is keyed by
/// `(range, total_investment)`. A hit returns the cached points with
/// only the anchor overridden to the caller's live figures.
#[derive(Default)]
pub struct PerformanceSeriesSynthesizer {
    cache: Mutex<Option<CachedSeries>>,
}

impl PerformanceSeriesSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the series for `range`, oldest point first, ending
    /// exactly at `total_investment + total_profit_loss`.
    ///
    /// An investment of zero or less yields an empty series: without a
    /// cost basis there is no meaningful history to chart.
    pub fn series(
        &self,
        range: TimeRange,
        total_investment: Decimal,
        total_profit_loss: Decimal,
        now: DateTime<Utc>,
    ) -> Vec<SeriesPoint> {
        if total_investment <= Decimal::ZERO {
            return Vec::new();
        }

        let mut cache = self.cache.lock().unwrap();
        if let Some(cached) = cache.as_ref() {
            if cached.range == range && cached.total_investment == total_investment {
                return with_live_anchor(&cached.points, total_investment, total_profit_loss);
            }
        }

        log::debug!(
            "Synthesizing {} performance series for investment {}",
            range.as_str(),
            total_investment
        );
        let points = synthesize(range, total_investment, total_profit_loss, now);
        *cache = Some(CachedSeries {
            range,
            total_investment,
            points: points.clone(),
        });
        points
    }
}

/// Re-issue a cached series with only the anchor carrying the live
/// figures. Non-anchor points are returned untouched.
fn with_live_anchor(
    points: &[SeriesPoint],
    total_investment: Decimal,
    total_profit_loss: Decimal,
) -> Vec<SeriesPoint> {
    let mut out = points.to_vec();
    if let Some(anchor) = out.iter_mut().find(|p| p.is_anchor) {
        anchor.value = anchor_value(total_investment, total_profit_loss);
        anchor.profit_loss = total_profit_loss.round_dp(DECIMAL_PRECISION);
        anchor.profit_loss_percent = percent_of(total_profit_loss, total_investment);
        anchor.investment = total_investment;
    }
    out
}

fn synthesize(
    range: TimeRange,
    total_investment: Decimal,
    total_profit_loss: Decimal,
    now: DateTime<Utc>,
) -> Vec<SeriesPoint> {
    let point_count = range.point_count();
    let average_step = total_profit_loss / Decimal::from(point_count as u64);
    let noise_scale =
        (average_step.abs() * dec!(2)).max(total_investment * range.volatility_base());

    let mut rng = rand::thread_rng();
    let mut points: Vec<SeriesPoint> = Vec::with_capacity(point_count);

    // Walk backward from the anchor. Generation order is newest first;
    // the anchor itself takes no noise so it stays exact.
    let mut running = anchor_value(total_investment, total_profit_loss);
    for steps_back in 0..point_count {
        let value = running.max(Decimal::ZERO).round_dp(DECIMAL_PRECISION);
        let profit_loss = (value - total_investment).round_dp(DECIMAL_PRECISION);

        points.push(SeriesPoint {
            label: point_label(range, steps_back, now),
            value,
            profit_loss,
            profit_loss_percent: percent_of(profit_loss, total_investment),
            investment: total_investment,
            is_anchor: steps_back == 0,
        });

        running -= average_step + noise(&mut rng, noise_scale);
    }

    points.reverse();
    points
}

/// The exact live value the series must end at, floored at zero like
/// every other point.
fn anchor_value(total_investment: Decimal, total_profit_loss: Decimal) -> Decimal {
    (total_investment + total_profit_loss)
        .max(Decimal::ZERO)
        .round_dp(DECIMAL_PRECISION)
}

fn percent_of(amount: Decimal, investment: Decimal) -> Decimal {
    if investment > Decimal::ZERO {
        (amount / investment * Decimal::ONE_HUNDRED).round_dp(PERCENT_PRECISION)
    } else {
        Decimal::ZERO
    }
}

/// Bounded random perturbation in `[-scale, scale]`.
///
/// The only seam where the walk leaves `Decimal`: sampling happens in
/// `f64` and converts back, falling to zero on any conversion loss.
fn noise(rng: &mut impl Rng, scale: Decimal) -> Decimal {
    if scale <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let scale = scale.to_f64().unwrap_or(0.0);
    let sample: f64 = rng.gen_range(-1.0..1.0);
    Decimal::from_f64(sample * scale).unwrap_or(Decimal::ZERO)
}

/// Human-readable label for the point `steps_back` steps behind `now`.
///
/// Intraday points are labeled with wall-clock hours and the newest one
/// reads "Now"; daily points are labeled with dates, with "Today" and
/// "Yesterday" for the two newest.
pub(crate) fn point_label(range: TimeRange, steps_back: usize, now: DateTime<Utc>) -> String {
    if range.is_intraday() {
        match steps_back {
            0 => "Now".to_string(),
            n => (now - Duration::hours(n as i64)).format("%H:00").to_string(),
        }
    } else {
        match steps_back {
            0 => "Today".to_string(),
            1 => "Yesterday".to_string(),
            n => (now - Duration::days(n as i64)).format("%b %-d").to_string(),
        }
    }
}
