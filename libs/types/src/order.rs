//! Order input types and submission results.

use crate::errors::RejectReason;
use crate::ids::{OrderId, Symbol};
use crate::numeric::Quantity;
use crate::trade::Trade;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order type.
///
/// Only limit orders may rest on the book; the other three are
/// immediate-execution variants with different residual semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    Limit,
    Ioc,
    Fok,
}

impl OrderType {
    /// Whether this type carries a limit price.
    pub fn requires_price(&self) -> bool {
        !matches!(self, OrderType::Market)
    }
}

/// Terminal status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Fully executed.
    Filled,
    /// Resting on the book (any fills are reported via the trades list).
    Accepted,
    /// Residual quantity discarded (market exhaustion or IOC remainder).
    Canceled,
    /// Refused with no side effects.
    Rejected,
}

/// An order as submitted by a caller, before validation.
///
/// `quantity` and `price` are raw decimals here; the engine converts them to
/// the checked `Quantity`/`Price` types during validation so that a bad
/// value becomes a rejection rather than a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub symbol: Symbol,
    #[serde(alias = "type")]
    pub order_type: OrderType,
    pub side: Side,
    pub quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl OrderRequest {
    pub fn limit(symbol: impl Into<Symbol>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Limit,
            side,
            quantity,
            price: Some(price),
        }
    }

    pub fn market(symbol: impl Into<Symbol>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side,
            quantity,
            price: None,
        }
    }

    pub fn ioc(symbol: impl Into<Symbol>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Ioc,
            side,
            quantity,
            price: Some(price),
        }
    }

    pub fn fok(symbol: impl Into<Symbol>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Fok,
            side,
            quantity,
            price: Some(price),
        }
    }
}

/// Outcome of one submission, returned to the caller synchronously.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: SubmissionStatus,
    pub order_id: OrderId,
    pub filled_quantity: Quantity,
    pub remaining_quantity: Quantity,
    /// Trades produced by this submission, in execution order.
    pub trades: Vec<Trade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectReason>,
}

impl SubmissionResult {
    /// A rejection that produced no trades and touched no book state.
    pub fn rejected(order_id: OrderId, remaining: Quantity, reason: RejectReason) -> Self {
        Self {
            status: SubmissionStatus::Rejected,
            order_id,
            filled_quantity: Quantity::zero(),
            remaining_quantity: remaining,
            trades: Vec::new(),
            reason: Some(reason),
        }
    }

    pub fn executed(
        status: SubmissionStatus,
        order_id: OrderId,
        filled_quantity: Quantity,
        remaining_quantity: Quantity,
        trades: Vec<Trade>,
    ) -> Self {
        Self {
            status,
            order_id,
            filled_quantity,
            remaining_quantity,
            trades,
            reason: None,
        }
    }
}
