//! Market-data payloads published after matching steps.
//!
//! Trades are published as the `Trade` record itself; these types cover the
//! book-state side of the feed. Price/quantity pairs serialize as
//! `["price", "qty"]` string arrays, so JSON consumers never see lossy
//! numbers.

use serde::{Deserialize, Serialize};
use types::ids::Symbol;
use types::numeric::{Price, Quantity};

/// Best bid and offer, each with the total quantity resting at that price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bbo {
    pub bid: Option<(Price, Quantity)>,
    pub ask: Option<(Price, Quantity)>,
}

/// Aggregated depth view: bids descending, asks ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub symbol: Symbol,
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

impl DepthSnapshot {
    /// The view served for symbols the engine has never seen.
    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }
}

/// Snapshot broadcast on the market-data topic after every matching step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataSnapshot {
    /// Unix nanoseconds, taken inside the matching step.
    pub timestamp: i64,
    pub symbol: Symbol,
    pub bbo: Bbo,
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_wire_shape() {
        let snapshot = MarketDataSnapshot {
            timestamp: 1708123456789000000,
            symbol: Symbol::from("BTC-USDT"),
            bbo: Bbo {
                bid: Some((Price::from_u64(99), Quantity::from_u64(2))),
                ask: None,
            },
            bids: vec![(Price::from_u64(99), Quantity::from_u64(2))],
            asks: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"bids\":[[\"99\",\"2\"]]"));
        assert!(json.contains("\"bbo\":{\"bid\":[\"99\",\"2\"],\"ask\":null}"));

        let back: MarketDataSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_empty_depth_snapshot() {
        let depth = DepthSnapshot::empty(Symbol::from("UNKNOWN"));
        assert!(depth.bids.is_empty());
        assert!(depth.asks.is_empty());
    }
}
