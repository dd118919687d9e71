//! Ticker models: the normalized [`PriceUpdate`] record and the raw wire
//! structures it is decoded from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A normalized price observation for a single asset.
///
/// Produced on every inbound tick and superseded by the next update for
/// the same asset. Ephemeral by design: updates are coalesced by keeping
/// only the latest per asset id, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdate {
    /// Internal asset identifier (e.g. "bitcoin"), translated back from
    /// the exchange symbol.
    pub asset_id: String,
    /// Last traded price.
    pub price: Decimal,
    /// Price change over the trailing 24 hours, in percent.
    pub change_percent_24h: Decimal,
    /// Quote-currency volume over the trailing 24 hours.
    pub volume_24h: Decimal,
    /// Event time reported by the exchange.
    pub observed_at: DateTime<Utc>,
}

/// Envelope of the multiplexed stream: identifies which stream a payload
/// belongs to.
#[derive(Debug, Deserialize)]
pub struct StreamFrame {
    pub stream: String,
    pub data: TickerMessage,
}

/// Raw 24h ticker payload as sent by the exchange.
///
/// Numeric fields arrive as strings on the wire; decoding to [`Decimal`]
/// happens in the client so that an unparseable field drops the frame
/// instead of failing the stream.
#[derive(Debug, Deserialize)]
pub struct TickerMessage {
    /// Exchange symbol, e.g. "BTCUSDT".
    #[serde(rename = "s")]
    pub symbol: String,
    /// Last price.
    #[serde(rename = "c")]
    pub last_price: String,
    /// 24h price change percent.
    #[serde(rename = "P")]
    pub change_percent: String,
    /// 24h quote-asset volume.
    #[serde(rename = "q")]
    pub quote_volume: String,
    /// Event time in milliseconds since the epoch.
    #[serde(rename = "E")]
    pub event_time_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_message_deserializes_wire_fields() {
        let raw = r#"{"e":"24hrTicker","E":1700000000000,"s":"BTCUSDT","c":"42000.10","P":"2.45","q":"123456.78"}"#;
        let msg: TickerMessage = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.symbol, "BTCUSDT");
        assert_eq!(msg.last_price, "42000.10");
        assert_eq!(msg.change_percent, "2.45");
        assert_eq!(msg.quote_volume, "123456.78");
        assert_eq!(msg.event_time_ms, 1_700_000_000_000);
    }

    #[test]
    fn test_stream_frame_unwraps_envelope() {
        let raw = r#"{"stream":"btcusdt@ticker","data":{"E":1700000000000,"s":"BTCUSDT","c":"1","P":"0","q":"0"}}"#;
        let frame: StreamFrame = serde_json::from_str(raw).unwrap();
        assert_eq!(frame.stream, "btcusdt@ticker");
        assert_eq!(frame.data.symbol, "BTCUSDT");
    }
}
