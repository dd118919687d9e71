//! Coinfolio Core - Live portfolio valuation and performance engine.
//!
//! This crate merges static holdings with a streaming price feed and
//! derives everything the dashboard displays from them: per-asset
//! valuations, the portfolio snapshot, the synthesized performance
//! series, and the live overlay figures. It is UI-agnostic and holds no
//! persistent state; every output is a recomputation from current
//! inputs.

pub mod accounts;
pub mod constants;
pub mod errors;
pub mod events;
pub mod live;
pub mod portfolio;
pub mod valuation;

// Re-export common types from the portfolio modules
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
