//! Level sweep: one incoming order against one book.
//!
//! Buy orders consume asks lowest-first, sell orders consume bids
//! highest-first. Trades always execute at the maker's resting price, and
//! within a level the front maker is fully consumed before the next one
//! trades. Trade ids come from the engine's shared sequence so they are
//! allocated in emission order.

use std::sync::atomic::{AtomicU64, Ordering};

use types::errors::EngineError;
use types::ids::{OrderId, Symbol, TradeId};
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};
use types::trade::Trade;

use crate::book::OrderBook;

use super::boundary;

/// The incoming (aggressor) order while it is being matched.
#[derive(Debug)]
pub struct TakerOrder {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub limit: Option<Price>,
    pub quantity: Quantity,
    pub remaining: Quantity,
}

impl TakerOrder {
    pub fn new(
        order_id: OrderId,
        side: Side,
        order_type: OrderType,
        limit: Option<Price>,
        quantity: Quantity,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type,
            limit,
            quantity,
            remaining: quantity,
        }
    }

    pub fn filled(&self) -> Quantity {
        self.quantity
            .checked_sub(self.remaining)
            .unwrap_or(Quantity::zero())
    }
}

/// Fill-or-kill pre-check: can the opposite side cover `need` at prices
/// inside the boundary? Runs before any mutation, so a failed check leaves
/// the book bit-identical to its pre-submission state.
pub fn fok_fillable(book: &OrderBook, side: Side, limit: Price, need: Quantity) -> bool {
    match side {
        Side::Buy => book.asks.can_fill(need, Some(limit)),
        Side::Sell => book.bids.can_fill(need, Some(limit)),
    }
}

/// Match `taker` against the opposite side until it is filled, the price
/// boundary stops it, or the side is exhausted.
pub fn sweep(
    book: &mut OrderBook,
    taker: &mut TakerOrder,
    trade_seq: &AtomicU64,
    timestamp: i64,
) -> Result<Vec<Trade>, EngineError> {
    match taker.side {
        Side::Buy => sweep_asks(book, taker, trade_seq, timestamp),
        Side::Sell => sweep_bids(book, taker, trade_seq, timestamp),
    }
}

fn sweep_asks(
    book: &mut OrderBook,
    taker: &mut TakerOrder,
    trade_seq: &AtomicU64,
    timestamp: i64,
) -> Result<Vec<Trade>, EngineError> {
    let symbol = book.symbol().clone();
    let mut trades = Vec::new();

    while !taker.remaining.is_zero() {
        let Some(level_price) = book.asks.best_price() else {
            break;
        };
        if !boundary::marketable(taker.side, taker.limit, level_price) {
            break;
        }
        let Some(level) = book.asks.level_mut(level_price) else {
            break;
        };

        while !taker.remaining.is_zero() && !level.is_empty() {
            let front_remaining = match level.peek_front() {
                Some(front) => front.remaining_quantity,
                None => break,
            };
            let fill = taker.remaining.min(front_remaining);

            let maker_order_id = level
                .consume_front(fill)
                .ok_or_else(|| violation(&symbol, format!("over-consumption at level {level_price}")))?;
            taker.remaining = taker
                .remaining
                .checked_sub(fill)
                .ok_or_else(|| violation(&symbol, "taker remaining underflow".to_string()))?;

            let trade_id = TradeId::new(trade_seq.fetch_add(1, Ordering::Relaxed) + 1);
            trades.push(Trade::new(
                trade_id,
                symbol.clone(),
                level_price,
                fill,
                taker.side,
                maker_order_id,
                taker.order_id,
                timestamp,
            ));
        }

        book.asks.remove_if_empty(level_price);
    }

    Ok(trades)
}

fn sweep_bids(
    book: &mut OrderBook,
    taker: &mut TakerOrder,
    trade_seq: &AtomicU64,
    timestamp: i64,
) -> Result<Vec<Trade>, EngineError> {
    let symbol = book.symbol().clone();
    let mut trades = Vec::new();

    while !taker.remaining.is_zero() {
        let Some(level_price) = book.bids.best_price() else {
            break;
        };
        if !boundary::marketable(taker.side, taker.limit, level_price) {
            break;
        }
        let Some(level) = book.bids.level_mut(level_price) else {
            break;
        };

        while !taker.remaining.is_zero() && !level.is_empty() {
            let front_remaining = match level.peek_front() {
                Some(front) => front.remaining_quantity,
                None => break,
            };
            let fill = taker.remaining.min(front_remaining);

            let maker_order_id = level
                .consume_front(fill)
                .ok_or_else(|| violation(&symbol, format!("over-consumption at level {level_price}")))?;
            taker.remaining = taker
                .remaining
                .checked_sub(fill)
                .ok_or_else(|| violation(&symbol, "taker remaining underflow".to_string()))?;

            let trade_id = TradeId::new(trade_seq.fetch_add(1, Ordering::Relaxed) + 1);
            trades.push(Trade::new(
                trade_id,
                symbol.clone(),
                level_price,
                fill,
                taker.side,
                maker_order_id,
                taker.order_id,
                timestamp,
            ));
        }

        book.bids.remove_if_empty(level_price);
    }

    Ok(trades)
}

fn violation(symbol: &Symbol, detail: String) -> EngineError {
    EngineError::InvariantViolation {
        symbol: symbol.to_string(),
        detail,
    }
}
