pub mod accounts_model;
pub mod accounts_traits;

pub use accounts_model::AccountState;
pub use accounts_traits::AccountStateProviderTrait;
