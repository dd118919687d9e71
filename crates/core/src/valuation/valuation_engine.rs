//! The valuation engine: single owner of the live price map and every
//! derived figure.
//!
//! Inbound ticks are the only source of concurrency. Each tick performs
//! a last-write-wins map assignment followed by a synchronous recompute
//! of the aggregates and the snapshot, all under one lock, so the map
//! update and the derived state form one atomic step relative to other
//! ticks. The aggregator reads the price map as a snapshot at
//! computation time; cross-asset arrival order is irrelevant.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;

use coinfolio_market_feed::{PriceSink, PriceUpdate};

use crate::accounts::AccountState;
use crate::events::{NoOpValuationEventSink, ValuationEvent, ValuationEventSink};
use crate::live::{LiveFigures, LiveSnapshotCell};
use crate::portfolio::holdings::{aggregate_holdings, AggregatedHolding};
use crate::portfolio::performance::{PerformanceSeriesSynthesizer, SeriesPoint, TimeRange};
use crate::portfolio::summary::{summarize, PortfolioSnapshot};

struct EngineState {
    account: AccountState,
    prices: HashMap<String, PriceUpdate>,
    aggregated: Vec<AggregatedHolding>,
    snapshot: PortfolioSnapshot,
}

/// Live portfolio valuation engine.
///
/// Feed the current [`AccountState`] in, deliver [`PriceUpdate`]s (the
/// engine itself is a [`PriceSink`]), and read the derived outputs:
/// sorted aggregated holdings, the portfolio snapshot, the synthesized
/// performance series and the live overlay cell.
///
/// Data-quality degradation is in-band: a cold price cache falls back to
/// static prices, zero cost bases yield zero percentages, and an empty
/// account produces the zero snapshot and an empty series. None of the
/// read paths can fail.
pub struct ValuationEngine {
    state: Mutex<EngineState>,
    synthesizer: PerformanceSeriesSynthesizer,
    live_cell: LiveSnapshotCell,
    event_sink: Arc<dyn ValuationEventSink>,
}

impl ValuationEngine {
    pub fn new(account: AccountState) -> Self {
        Self::with_event_sink(account, Arc::new(NoOpValuationEventSink))
    }

    pub fn with_event_sink(account: AccountState, event_sink: Arc<dyn ValuationEventSink>) -> Self {
        let engine = Self {
            state: Mutex::new(EngineState {
                account,
                prices: HashMap::new(),
                aggregated: Vec::new(),
                snapshot: PortfolioSnapshot::empty(),
            }),
            synthesizer: PerformanceSeriesSynthesizer::new(),
            live_cell: LiveSnapshotCell::new(),
            event_sink,
        };
        engine.recompute();
        engine
    }

    /// Replace the holdings and cash balance, e.g. after a buy/sell was
    /// recorded upstream. Returns the recomputed snapshot.
    pub fn set_account_state(&self, account: AccountState) -> PortfolioSnapshot {
        {
            let mut state = self.state.lock().unwrap();
            state.account = account;
        }
        self.recompute()
    }

    /// Apply one price tick: last-write-wins per asset, then a
    /// synchronous recompute. Returns the recomputed snapshot.
    pub fn apply_price_update(&self, update: PriceUpdate) -> PortfolioSnapshot {
        {
            let mut state = self.state.lock().unwrap();
            state.prices.insert(update.asset_id.clone(), update);
        }
        self.recompute()
    }

    fn recompute(&self) -> PortfolioSnapshot {
        let snapshot = {
            let mut state = self.state.lock().unwrap();
            state.aggregated = aggregate_holdings(&state.account.holdings, &state.prices);
            state.snapshot = summarize(&state.aggregated, state.account.cash_balance);
            state.snapshot.clone()
        };

        // The cell stays unpopulated until there is an investment to
        // value, so the overlay's synthesized-value fallback applies for
        // empty portfolios.
        if snapshot.total_investment > Decimal::ZERO {
            self.live_cell.publish(LiveFigures::from(&snapshot));
        }
        self.event_sink
            .emit(ValuationEvent::SnapshotUpdated(snapshot.clone()));
        debug!(
            "Recomputed snapshot: total {} (P&L {})",
            snapshot.total_value, snapshot.total_profit_loss
        );
        snapshot
    }

    /// Aggregated holdings, sorted descending by current value.
    pub fn holdings(&self) -> Vec<AggregatedHolding> {
        self.state.lock().unwrap().aggregated.clone()
    }

    /// The current portfolio snapshot.
    pub fn snapshot(&self) -> PortfolioSnapshot {
        self.state.lock().unwrap().snapshot.clone()
    }

    /// The performance series for a range, anchored to the live
    /// snapshot. Cached points are reused across P&L fluctuations; see
    /// the synthesizer for the regeneration rules.
    pub fn performance_series(&self, range: TimeRange) -> Vec<SeriesPoint> {
        let (total_investment, total_profit_loss) = {
            let state = self.state.lock().unwrap();
            (
                state.snapshot.total_investment,
                state.snapshot.total_profit_loss,
            )
        };
        self.synthesizer
            .series(range, total_investment, total_profit_loss, Utc::now())
    }

    /// The live overlay cell. Clones share the underlying cell, so the
    /// overlay keeps reading current figures without re-querying the
    /// engine.
    pub fn live_cell(&self) -> LiveSnapshotCell {
        self.live_cell.clone()
    }

    /// The asset ids a feed subscription should cover.
    pub fn tracked_asset_ids(&self) -> HashSet<String> {
        self.state
            .lock()
            .unwrap()
            .account
            .holdings
            .iter()
            .map(|h| h.asset_id.clone())
            .collect()
    }
}

impl PriceSink for ValuationEngine {
    fn publish(&self, update: PriceUpdate) {
        self.apply_price_update(update);
    }
}
