//! Limit-order matching engine.
//!
//! Per-symbol order books matched under price-time priority:
//! - `book` — price levels with FIFO queues, heap-backed best-price
//!   discovery with lazy deletion, depth/BBO views
//! - `matching` — the boundary predicate and level sweep for limit, market,
//!   IOC and FOK orders
//! - `engine` — symbol registry, per-symbol locking, worker-pool dispatch,
//!   id allocation
//! - `pubsub` — best-effort fan-out of trades and market-data snapshots
//!
//! Submissions for one symbol are strictly serialized; different symbols
//! match in parallel. There is no persistence — a fresh process starts with
//! an empty registry.

pub mod book;
pub mod engine;
pub mod events;
pub mod matching;
pub mod pubsub;

pub use engine::{EngineConfig, MatchingEngine, MAX_DEPTH};
