//! Valuation events: an explicit subscribe/notify seam.
//!
//! Consumers that need to react to recomputes (summary displays, the
//! chart's range controller) receive an injected sink instead of
//! watching a process-wide singleton, which keeps the engine testable in
//! isolation from any UI runtime.

mod sink;
mod valuation_event;

pub use sink::{MockValuationEventSink, NoOpValuationEventSink, ValuationEventSink};
pub use valuation_event::ValuationEvent;
