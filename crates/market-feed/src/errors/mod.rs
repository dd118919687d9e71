//! Error types for the market feed crate.

use thiserror::Error;

/// Errors that can occur while establishing a feed subscription.
///
/// Note the deliberately small surface: once a subscription is live,
/// transport failures and malformed frames are *not* errors. A dropped
/// socket degrades to feed silence (last-known prices stay authoritative)
/// and a bad frame is discarded without interrupting the stream.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The configured endpoint is not a valid WebSocket URL.
    #[error("Invalid feed endpoint: {0}")]
    InvalidEndpoint(String),

    /// None of the requested asset ids map to a streamable symbol,
    /// so there is nothing to subscribe to.
    #[error("Subscription set resolves to no streamable symbols")]
    EmptySubscription,

    /// The WebSocket handshake failed.
    #[error("Feed connection failed: {0}")]
    Connect(String),
}
