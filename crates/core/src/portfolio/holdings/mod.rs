//! Holdings module - per-asset aggregation of positions and live prices.

pub mod holdings_model;
pub mod holdings_service;


pub use holdings_model::{AggregatedHolding, DisplayMeta, Holding};
pub use holdings_service::aggregate_holdings;
