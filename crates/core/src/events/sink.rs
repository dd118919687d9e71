//! Valuation event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::ValuationEvent;

/// Trait for receiving valuation events.
///
/// `emit()` runs on the tick path and must be fast and non-blocking.
/// Failure to deliver must not affect the recompute (best-effort).
pub trait ValuationEventSink: Send + Sync {
    /// Emit a single event.
    fn emit(&self, event: ValuationEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpValuationEventSink;

impl ValuationEventSink for NoOpValuationEventSink {
    fn emit(&self, _event: ValuationEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockValuationEventSink {
    events: Arc<Mutex<Vec<ValuationEvent>>>,
}

impl MockValuationEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<ValuationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl ValuationEventSink for MockValuationEventSink {
    fn emit(&self, event: ValuationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::summary::PortfolioSnapshot;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpValuationEventSink;
        sink.emit(ValuationEvent::SnapshotUpdated(PortfolioSnapshot::empty()));
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockValuationEventSink::new();
        assert!(sink.is_empty());

        sink.emit(ValuationEvent::SnapshotUpdated(PortfolioSnapshot::empty()));
        sink.emit(ValuationEvent::SnapshotUpdated(PortfolioSnapshot::empty()));
        assert_eq!(sink.len(), 2);
    }
}
