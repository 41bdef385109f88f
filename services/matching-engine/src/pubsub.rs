//! In-process fan-out of trades and market-data snapshots.
//!
//! One broadcast channel per (topic, symbol), created lazily on first
//! subscribe or publish. Each subscriber gets a bounded ring of `capacity`
//! messages; a subscriber that falls behind loses the oldest messages
//! rather than slowing the publisher. Delivery is best-effort with no
//! replay — a publish with no live subscribers is dropped.

use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;
use types::ids::Symbol;
use types::trade::Trade;

use crate::events::MarketDataSnapshot;

pub struct PubSub {
    capacity: usize,
    trades: DashMap<Symbol, broadcast::Sender<Trade>>,
    market_data: DashMap<Symbol, broadcast::Sender<MarketDataSnapshot>>,
}

impl PubSub {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            trades: DashMap::new(),
            market_data: DashMap::new(),
        }
    }

    pub fn subscribe_trades(&self, symbol: &Symbol) -> broadcast::Receiver<Trade> {
        sender(&self.trades, symbol, self.capacity).subscribe()
    }

    pub fn subscribe_market_data(&self, symbol: &Symbol) -> broadcast::Receiver<MarketDataSnapshot> {
        sender(&self.market_data, symbol, self.capacity).subscribe()
    }

    pub fn publish_trade(&self, trade: &Trade) {
        if let Some(tx) = self.trades.get(&trade.symbol) {
            if tx.send(trade.clone()).is_err() {
                debug!(symbol = %trade.symbol, "trade published with no live subscribers");
            }
        }
    }

    pub fn publish_market_data(&self, snapshot: MarketDataSnapshot) {
        if let Some(tx) = self.market_data.get(&snapshot.symbol) {
            let symbol = snapshot.symbol.clone();
            if tx.send(snapshot).is_err() {
                debug!(symbol = %symbol, "snapshot published with no live subscribers");
            }
        }
    }
}

fn sender<T: Clone>(
    topics: &DashMap<Symbol, broadcast::Sender<T>>,
    symbol: &Symbol,
    capacity: usize,
) -> broadcast::Sender<T> {
    topics
        .entry(symbol.clone())
        .or_insert_with(|| broadcast::channel(capacity).0)
        .clone()
}
