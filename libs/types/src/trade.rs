//! Trade execution records.

use crate::ids::{OrderId, Symbol, TradeId};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use serde::{Deserialize, Serialize};

/// One execution between a resting maker and an incoming taker.
///
/// Immutable once emitted. The price is always the maker's resting price;
/// `aggressor_side` is the side of the incoming order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub symbol: Symbol,
    pub price: Price,
    pub quantity: Quantity,
    pub aggressor_side: Side,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    /// Unix nanoseconds, assigned inside the matching step.
    pub timestamp: i64,
}

impl Trade {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trade_id: TradeId,
        symbol: Symbol,
        price: Price,
        quantity: Quantity,
        aggressor_side: Side,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        timestamp: i64,
    ) -> Self {
        Self {
            trade_id,
            symbol,
            price,
            quantity,
            aggressor_side,
            maker_order_id,
            taker_order_id,
            timestamp,
        }
    }
}
