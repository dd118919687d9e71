use crate::portfolio::summary::PortfolioSnapshot;

/// Events emitted by the valuation engine after a recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum ValuationEvent {
    /// The portfolio snapshot changed - a price tick was applied or the
    /// account state was replaced.
    SnapshotUpdated(PortfolioSnapshot),
}
