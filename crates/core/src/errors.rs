//! Core error types for the valuation engine.
//!
//! Deliberately narrow: data-quality conditions (cold price cache, zero
//! cost basis, empty holdings) are handled with in-band defaults and
//! never reach this type. Errors exist only at the boundaries - the feed
//! transport and the account-state provider.

use thiserror::Error;

use coinfolio_market_feed::FeedError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Feed operation failed: {0}")]
    Feed(#[from] FeedError),

    #[error("Account state unavailable: {0}")]
    AccountState(String),

    #[error("Input validation failed: {0}")]
    Validation(String),
}
