//! Performance module - synthesized, anchor-bound historical series.

pub mod performance_model;
pub mod performance_service;

#[cfg(test)]
mod performance_service_tests;

pub use performance_model::{SeriesPoint, TimeRange};
pub use performance_service::PerformanceSeriesSynthesizer;
