//! Coinfolio Market Feed Crate
//!
//! This crate provides streaming market data for the Coinfolio valuation
//! engine: a multiplexed ticker subscription over a single WebSocket
//! connection, normalized into [`PriceUpdate`] records.
//!
//! # Overview
//!
//! - One connection per subscription *set* (not per asset)
//! - Asset-id to stream-symbol translation owned by [`SymbolTable`]
//! - Inbound ticks delivered through the [`PriceSink`] trait
//! - Generation-tagged connections: replacing a subscription detaches the
//!   old reader before the new one attaches, so a slow-to-close socket can
//!   never overwrite fresher data
//!
//! # Delivery semantics
//!
//! Malformed frames and unknown symbols are dropped, not surfaced: an
//! occasional unrecognized tick must not interrupt valuation of known
//! assets. Transport failures end the subscription without retry; the
//! consumer re-subscribes on the next holdings change. Staleness is
//! tolerable here because the price is advisory until an order is placed
//! elsewhere.

pub mod client;
pub mod errors;
pub mod models;
pub mod sink;
pub mod symbols;

pub use client::{FeedClient, FeedSubscription};
pub use errors::FeedError;
pub use models::PriceUpdate;
pub use sink::{MockPriceSink, NoOpPriceSink, PriceSink};
pub use symbols::{SymbolTable, DEFAULT_SYMBOLS};
