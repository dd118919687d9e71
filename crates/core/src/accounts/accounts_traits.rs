use async_trait::async_trait;

use super::accounts_model::AccountState;
use crate::errors::Result;

/// Source of holdings and cash balance.
///
/// Implemented outside this crate (REST client, fixture data). The
/// engine re-reads it whenever the caller learns of an upstream change;
/// there is no polling or caching here.
#[async_trait]
pub trait AccountStateProviderTrait: Send + Sync {
    async fn account_state(&self) -> Result<AccountState>;
}
