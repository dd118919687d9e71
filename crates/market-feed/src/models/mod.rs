//! Feed domain models and wire-format structures.

mod ticker;

pub use ticker::{PriceUpdate, StreamFrame, TickerMessage};
