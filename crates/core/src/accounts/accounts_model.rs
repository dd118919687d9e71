use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::Holding;

/// The account-side inputs to the valuation engine: the open positions
/// and the uninvested cash balance.
///
/// Owned and mutated upstream (purchases, sales, deposits); this crate
/// treats it as read-only input and replaces it wholesale when the
/// provider reports a change.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub cash_balance: Decimal,
}

impl AccountState {
    pub fn empty() -> Self {
        Self::default()
    }
}
