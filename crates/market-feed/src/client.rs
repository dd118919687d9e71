//! Streaming feed client.
//!
//! One multiplexed WebSocket connection per subscription set. Replacing a
//! subscription follows close-before-reopen ordering: the client bumps a
//! shared generation counter before connecting, which detaches any
//! previous reader, and every reader re-checks its generation before
//! publishing so a lingering socket can never overwrite fresher data.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::DateTime;
use futures::{SinkExt, StreamExt};
use rust_decimal::Decimal;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::FeedError;
use crate::models::{PriceUpdate, StreamFrame};
use crate::sink::PriceSink;
use crate::symbols::SymbolTable;

/// Client for the exchange ticker stream.
///
/// The client itself holds no connection; each call to [`subscribe`]
/// opens one and returns a [`FeedSubscription`] owning it.
///
/// [`subscribe`]: FeedClient::subscribe
pub struct FeedClient {
    endpoint: Url,
    symbols: Arc<SymbolTable>,
    generation: Arc<AtomicU64>,
}

impl FeedClient {
    /// Create a client for the given stream endpoint, using the default
    /// symbol table.
    pub fn new(endpoint: &str) -> Result<Self, FeedError> {
        Self::with_symbols(endpoint, SymbolTable::new())
    }

    /// Create a client with a custom symbol table.
    pub fn with_symbols(endpoint: &str, symbols: SymbolTable) -> Result<Self, FeedError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| FeedError::InvalidEndpoint(e.to_string()))?;
        match endpoint.scheme() {
            "ws" | "wss" => {}
            other => {
                return Err(FeedError::InvalidEndpoint(format!(
                    "unsupported scheme '{}'",
                    other
                )))
            }
        }
        Ok(Self {
            endpoint,
            symbols: Arc::new(symbols),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Open a multiplexed subscription for the given asset ids.
    ///
    /// Any previous subscription from this client is detached before the
    /// new connection opens. Asset ids without a stream symbol are
    /// skipped; if none map, no connection is attempted and
    /// [`FeedError::EmptySubscription`] is returned.
    pub async fn subscribe(
        &self,
        asset_ids: &HashSet<String>,
        sink: Arc<dyn PriceSink>,
    ) -> Result<FeedSubscription, FeedError> {
        let path = self.symbols.stream_path(asset_ids);
        if path.is_empty() {
            return Err(FeedError::EmptySubscription);
        }

        // Detach any previous reader before the new connection opens.
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut request = self.endpoint.clone();
        request.set_query(Some(&format!("streams={}", path)));

        let (ws, _) = connect_async(request.as_str())
            .await
            .map_err(|e| FeedError::Connect(e.to_string()))?;
        info!("Feed connected: {}", path);

        let (mut write, mut read) = ws.split();
        let symbols = Arc::clone(&self.symbols);
        let generation = Arc::clone(&self.generation);
        let task_generation = Arc::clone(&generation);

        let task = tokio::spawn(async move {
            while let Some(message) = read.next().await {
                if task_generation.load(Ordering::SeqCst) != my_gen {
                    debug!("Feed reader superseded, detaching");
                    break;
                }
                match message {
                    Ok(Message::Text(text)) => {
                        if let Some(update) = parse_frame(&symbols, text.as_str()) {
                            sink.publish(update);
                        }
                    }
                    Ok(Message::Ping(payload)) => {
                        if write.send(Message::Pong(payload)).await.is_err() {
                            warn!("Feed pong failed, closing reader");
                            break;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        info!("Feed closed by remote");
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        // Treated as feed silence: no retry here, the
                        // consumer re-subscribes on the next holdings
                        // change and last-known prices stay authoritative.
                        warn!("Feed transport error: {}", e);
                        break;
                    }
                }
            }
        });

        Ok(FeedSubscription {
            generation,
            my_gen,
            task,
        })
    }
}

/// Handle to a live feed subscription.
///
/// Dropping the handle detaches the reader, so a subscription never
/// outlives its owner. [`close`](FeedSubscription::close) does the same
/// where explicit teardown reads better at the call site.
pub struct FeedSubscription {
    generation: Arc<AtomicU64>,
    my_gen: u64,
    task: JoinHandle<()>,
}

impl FeedSubscription {
    /// True while this subscription is the client's current one and its
    /// reader is still running.
    pub fn is_active(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.my_gen && !self.task.is_finished()
    }

    /// Close the subscription.
    pub fn close(self) {
        self.detach();
    }

    fn detach(&self) {
        // Invalidate the generation first so an in-flight frame can no
        // longer publish, then stop the reader. If a newer subscription
        // already took over, leave the counter alone.
        let _ = self.generation.compare_exchange(
            self.my_gen,
            self.my_gen + 1,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        self.task.abort();
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Decode a raw frame into a [`PriceUpdate`].
///
/// Total over arbitrary input: malformed JSON, unmapped symbols and
/// unparseable numeric fields all yield `None`. A dropped tick is not an
/// error condition.
pub fn parse_frame(symbols: &SymbolTable, text: &str) -> Option<PriceUpdate> {
    let frame: StreamFrame = match serde_json::from_str(text) {
        Ok(frame) => frame,
        Err(e) => {
            debug!("Dropping malformed feed frame: {}", e);
            return None;
        }
    };

    let ticker = frame.data;
    let asset_id = match symbols.asset_id(&ticker.symbol) {
        Some(id) => id.to_string(),
        None => {
            debug!("Dropping tick for unmapped symbol {}", ticker.symbol);
            return None;
        }
    };

    let price = Decimal::from_str(&ticker.last_price).ok()?;
    let change_percent_24h = Decimal::from_str(&ticker.change_percent).ok()?;
    let volume_24h = Decimal::from_str(&ticker.quote_volume).ok()?;
    let observed_at = DateTime::from_timestamp_millis(ticker.event_time_ms)?;

    Some(PriceUpdate {
        asset_id,
        price,
        change_percent_24h,
        volume_24h,
        observed_at,
    })
}
