//! Portfolio modules - aggregation, summary and performance series.

pub mod holdings;
pub mod performance;
pub mod summary;

pub use holdings::{aggregate_holdings, AggregatedHolding, DisplayMeta, Holding};
pub use performance::{PerformanceSeriesSynthesizer, SeriesPoint, TimeRange};
pub use summary::{summarize, PortfolioSnapshot};
