pub mod summary_model;
pub mod summary_service;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::PortfolioSnapshot;
pub use summary_service::summarize;
