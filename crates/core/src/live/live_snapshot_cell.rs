//! Live read side-channel for the interactive chart overlay.
//!
//! The chart is drawn once per range change from the synthesized series
//! and must not redraw on every price tick. The point-inspection overlay
//! still has to show the true current figures for the anchor point, so
//! the tick path publishes them into this cell and the overlay reads
//! through it outside the draw path. Two accessors, two roles: the
//! series the chart was drawn from is immutable per draw; the cell is
//! always current. No state machine, just a shared cell.

use std::sync::{Arc, RwLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::performance::SeriesPoint;
use crate::portfolio::summary::PortfolioSnapshot;

/// The snapshot-derived figures the overlay substitutes for the anchor
/// point. `value` is the investment-based chart value (cost basis plus
/// P&L), not the cash-inclusive portfolio total.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveFigures {
    pub value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
    pub investment: Decimal,
}

impl From<&PortfolioSnapshot> for LiveFigures {
    fn from(snapshot: &PortfolioSnapshot) -> Self {
        Self {
            value: (snapshot.total_investment + snapshot.total_profit_loss).max(Decimal::ZERO),
            profit_loss: snapshot.total_profit_loss,
            profit_loss_percent: snapshot.total_profit_loss_percent,
            investment: snapshot.total_investment,
        }
    }
}

/// Shared cell holding the latest live figures.
///
/// Written by the valuation engine on every tick, read by the overlay
/// on demand. Cloning shares the underlying cell.
#[derive(Clone, Default)]
pub struct LiveSnapshotCell {
    inner: Arc<RwLock<Option<LiveFigures>>>,
}

impl LiveSnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the latest snapshot-derived figures.
    pub fn publish(&self, figures: LiveFigures) {
        *self.inner.write().unwrap() = Some(figures);
    }

    /// The latest published figures, if any tick has been observed.
    pub fn read(&self) -> Option<LiveFigures> {
        *self.inner.read().unwrap()
    }

    /// Resolve the figures to show for a series point: the live figures
    /// for the anchor, the synthesized values as-is for everything else.
    ///
    /// When nothing has been published (e.g. zero holdings) the anchor
    /// falls back to its own synthesized values rather than failing.
    pub fn overlay(&self, point: &SeriesPoint) -> SeriesPoint {
        if !point.is_anchor {
            return point.clone();
        }
        match self.read() {
            Some(live) => SeriesPoint {
                label: point.label.clone(),
                value: live.value,
                profit_loss: live.profit_loss,
                profit_loss_percent: live.profit_loss_percent,
                investment: live.investment,
                is_anchor: true,
            },
            None => point.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(is_anchor: bool) -> SeriesPoint {
        SeriesPoint {
            label: if is_anchor { "Today" } else { "Mar 1" }.to_string(),
            value: dec!(10500),
            profit_loss: dec!(500),
            profit_loss_percent: dec!(5),
            investment: dec!(10000),
            is_anchor,
        }
    }

    fn figures() -> LiveFigures {
        LiveFigures {
            value: dec!(10800),
            profit_loss: dec!(800),
            profit_loss_percent: dec!(8),
            investment: dec!(10000),
        }
    }

    #[test]
    fn test_overlay_substitutes_live_figures_on_anchor() {
        let cell = LiveSnapshotCell::new();
        cell.publish(figures());

        let shown = cell.overlay(&point(true));
        assert_eq!(shown.value, dec!(10800));
        assert_eq!(shown.profit_loss, dec!(800));
        assert_eq!(shown.label, "Today");
        assert!(shown.is_anchor);
    }

    #[test]
    fn test_overlay_leaves_non_anchor_points_alone() {
        let cell = LiveSnapshotCell::new();
        cell.publish(figures());

        let shown = cell.overlay(&point(false));
        assert_eq!(shown, point(false));
    }

    #[test]
    fn test_overlay_falls_back_when_never_populated() {
        let cell = LiveSnapshotCell::new();
        let shown = cell.overlay(&point(true));
        assert_eq!(shown, point(true));
    }

    #[test]
    fn test_clone_shares_the_cell() {
        let cell = LiveSnapshotCell::new();
        let reader = cell.clone();
        cell.publish(figures());
        assert_eq!(reader.read(), Some(figures()));
    }
}
