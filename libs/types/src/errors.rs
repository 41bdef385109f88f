//! Error taxonomy for the matching engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submission was rejected.
///
/// Rejections are part of the normal result vocabulary, not transport
/// errors: they produce no trades and never mutate a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    #[error("quantity must be positive")]
    InvalidQuantity,

    #[error("price is required for this order type")]
    MissingPrice,

    #[error("price must be positive")]
    InvalidPrice,

    #[error("insufficient liquidity for full fill")]
    InsufficientLiquidity,
}

/// Faults surfaced by the engine itself, as opposed to order rejections.
///
/// An invariant violation aborts the matching step and quarantines the
/// book; it indicates a bug, not bad input, and must never occur under a
/// correct implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("symbol {symbol} is quarantined after an internal fault")]
    SymbolQuarantined { symbol: String },

    #[error("book invariant violated for {symbol}: {detail}")]
    InvariantViolation { symbol: String, detail: String },

    #[error("matching task failed: {0}")]
    TaskFailed(String),
}
