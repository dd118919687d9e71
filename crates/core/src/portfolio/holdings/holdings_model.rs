use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display metadata carried along with a holding (name, ticker symbol,
/// icon). Opaque to the valuation logic.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMeta {
    pub name: String,
    pub symbol: String,
    pub image_url: Option<String>,
}

/// An open position as reported by the account-state provider.
///
/// Read-only input: quantity and cost basis are mutated upstream by
/// buy/sell events, and the holding disappears when its quantity reaches
/// zero. The numeric fields default to zero on deserialization so a
/// partially-loaded holding aggregates to zeros instead of failing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub asset_id: String,

    #[serde(default)]
    pub quantity: Decimal,

    /// Remaining invested amount for the position.
    #[serde(default)]
    pub cost_basis: Decimal,

    /// Price that accompanied the holding from the account snapshot.
    /// Used until a live tick for the asset is observed.
    #[serde(default)]
    pub last_price: Decimal,

    /// 24h change that accompanied the holding, in percent.
    #[serde(default)]
    pub change_percent_24h: Decimal,

    #[serde(default)]
    pub display: DisplayMeta,
}

/// A holding enriched with the latest observed price and the figures
/// derived from it.
///
/// Recomputed on every price tick or holdings change - never cached,
/// since the value ranking can change tick to tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedHolding {
    pub asset_id: String,
    pub quantity: Decimal,
    pub cost_basis: Decimal,
    pub display: DisplayMeta,

    pub current_price: Decimal,
    pub change_percent_24h: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,

    /// True when the price came from the live feed rather than the
    /// holding's static fallback fields.
    pub is_live_price: bool,
    /// When the live price was observed; `None` on static fallback.
    pub priced_at: Option<DateTime<Utc>>,
}
