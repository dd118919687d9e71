pub mod live_snapshot_cell;

pub use live_snapshot_cell::{LiveFigures, LiveSnapshotCell};
