//! The matching algorithm.
//!
//! `boundary` holds the marketability predicate; `sweep` walks opposite-side
//! levels best-first and produces trades.

pub mod boundary;
pub mod sweep;

pub use sweep::{fok_fillable, sweep, TakerOrder};
