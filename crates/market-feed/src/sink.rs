//! Price delivery trait and implementations.

use std::sync::{Arc, Mutex};

use crate::models::PriceUpdate;

/// Trait for receiving normalized price updates.
///
/// The feed reader calls `publish` for every decoded tick. Implementations
/// must be fast and non-blocking: the natural implementation is a
/// last-write-wins map assignment keyed by asset id, which coalesces
/// bursts for the same asset without back-pressure.
pub trait PriceSink: Send + Sync {
    /// Deliver a single price update.
    fn publish(&self, update: PriceUpdate);
}

/// No-op implementation for tests or contexts that discard prices.
#[derive(Clone, Default)]
pub struct NoOpPriceSink;

impl PriceSink for NoOpPriceSink {
    fn publish(&self, _update: PriceUpdate) {
        // Intentionally empty - updates are discarded
    }
}

/// Mock sink for testing - collects published updates.
#[derive(Clone, Default)]
pub struct MockPriceSink {
    updates: Arc<Mutex<Vec<PriceUpdate>>>,
}

impl MockPriceSink {
    pub fn new() -> Self {
        Self {
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected updates.
    pub fn updates(&self) -> Vec<PriceUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// Returns the number of collected updates.
    pub fn len(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    /// Returns true if no updates have been collected.
    pub fn is_empty(&self) -> bool {
        self.updates.lock().unwrap().is_empty()
    }
}

impl PriceSink for MockPriceSink {
    fn publish(&self, update: PriceUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}
