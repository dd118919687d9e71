//! Asset-id to exchange-symbol translation.
//!
//! The engine tracks assets by their internal identifiers (e.g.
//! "bitcoin"), while the exchange stream is keyed by trading symbols
//! ("BTCUSDT"). This table owns both directions of that mapping and
//! builds the combined stream path for a subscription set.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use tracing::debug;

/// Bidirectional asset-id / stream-symbol mapping.
///
/// Stream symbols are stored lowercase (the form used in stream paths);
/// inverse lookups are case-insensitive since inbound messages carry the
/// symbol uppercased.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    to_stream: HashMap<String, String>,
    to_asset: HashMap<String, String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Create a table pre-loaded with the default mappings.
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.load_defaults();
        table
    }

    /// Create an empty table (custom deployments, tests).
    pub fn empty() -> Self {
        Self {
            to_stream: HashMap::new(),
            to_asset: HashMap::new(),
        }
    }

    fn load_defaults(&mut self) {
        self.add("bitcoin", "btcusdt");
        self.add("ethereum", "ethusdt");
        self.add("binancecoin", "bnbusdt");
        self.add("solana", "solusdt");
        self.add("ripple", "xrpusdt");
        self.add("cardano", "adausdt");
        self.add("dogecoin", "dogeusdt");
        self.add("polkadot", "dotusdt");
        self.add("litecoin", "ltcusdt");
        self.add("chainlink", "linkusdt");
        self.add("avalanche-2", "avaxusdt");
        self.add("tron", "trxusdt");
        self.add("matic-network", "maticusdt");
        self.add("uniswap", "uniusdt");
    }

    /// Register a mapping. The symbol may be given in any case.
    pub fn add(&mut self, asset_id: &str, symbol: &str) {
        let stream = symbol.to_lowercase();
        self.to_asset
            .insert(stream.to_uppercase(), asset_id.to_string());
        self.to_stream.insert(asset_id.to_string(), stream);
    }

    /// Stream symbol (lowercase) for an asset id, if mapped.
    pub fn stream_symbol(&self, asset_id: &str) -> Option<&str> {
        self.to_stream.get(asset_id).map(String::as_str)
    }

    /// Asset id for a wire symbol, if mapped. Case-insensitive.
    pub fn asset_id(&self, wire_symbol: &str) -> Option<&str> {
        self.to_asset
            .get(&wire_symbol.to_uppercase())
            .map(String::as_str)
    }

    /// Build the combined stream path for a subscription set, e.g.
    /// `btcusdt@ticker/ethusdt@ticker`.
    ///
    /// The path is sorted so the same set always yields the same path.
    /// Asset ids without a mapping are skipped: they cannot be streamed
    /// and are priced from their static fallback fields instead.
    pub fn stream_path(&self, asset_ids: &HashSet<String>) -> String {
        let mut streams: Vec<String> = asset_ids
            .iter()
            .filter_map(|id| match self.stream_symbol(id) {
                Some(symbol) => Some(format!("{}@ticker", symbol)),
                None => {
                    debug!("No stream symbol for asset '{}', skipping", id);
                    None
                }
            })
            .collect();
        streams.sort();
        streams.join("/")
    }
}

lazy_static! {
    /// Shared default table used when no custom mapping is supplied.
    pub static ref DEFAULT_SYMBOLS: SymbolTable = SymbolTable::new();
}
