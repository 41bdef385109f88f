//! The matching engine: symbol registry, dispatch, and publishing.
//!
//! Each symbol's book sits behind its own mutex inside a concurrent map, so
//! submissions for one symbol serialize in lock-acquisition order while
//! different symbols match fully in parallel. The matching step itself runs
//! on the blocking worker pool; the async caller suspends until it
//! completes, then trades and a post-state snapshot are published and the
//! result returned.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use tokio::sync::broadcast;
use tokio::task;
use tracing::{debug, error, info};

use types::errors::{EngineError, RejectReason};
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::{OrderRequest, OrderType, Side, SubmissionResult, SubmissionStatus};
use types::trade::Trade;

use crate::book::OrderBook;
use crate::events::{Bbo, DepthSnapshot, MarketDataSnapshot};
use crate::matching::{fok_fillable, sweep, TakerOrder};
use crate::pubsub::PubSub;

/// Maximum depth levels served per side.
pub const MAX_DEPTH: usize = 1000;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Bounded per-subscriber queue length for both pubsub topics.
    pub pubsub_capacity: usize,
    /// Levels per side embedded in published snapshots.
    pub snapshot_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pubsub_capacity: 1024,
            snapshot_depth: 10,
        }
    }
}

/// Handle to the engine; cheap to clone and share across tasks.
#[derive(Clone)]
pub struct MatchingEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    books: DashMap<Symbol, Arc<Mutex<OrderBook>>>,
    order_seq: AtomicU64,
    trade_seq: AtomicU64,
    pubsub: PubSub,
    snapshot_depth: usize,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                books: DashMap::new(),
                order_seq: AtomicU64::new(0),
                trade_seq: AtomicU64::new(0),
                pubsub: PubSub::new(config.pubsub_capacity),
                snapshot_depth: config.snapshot_depth,
            }),
        }
    }

    /// Submit one order and await its terminal result.
    ///
    /// The order id is assigned up front; validation failures come back as
    /// `rejected` results without ever touching the book. Everything else
    /// runs as a single uninterruptible matching step under the symbol lock.
    pub async fn submit(&self, request: OrderRequest) -> Result<SubmissionResult, EngineError> {
        let order_id = OrderId::new(self.inner.order_seq.fetch_add(1, Ordering::Relaxed) + 1);

        let (quantity, limit) = match validate(&request) {
            Ok(validated) => validated,
            Err(reason) => {
                let remaining = Quantity::try_new(request.quantity).unwrap_or(Quantity::zero());
                debug!(%order_id, symbol = %request.symbol, %reason, "submission rejected");
                return Ok(SubmissionResult::rejected(order_id, remaining, reason));
            }
        };

        let book = self.book(&request.symbol);
        let inner = Arc::clone(&self.inner);
        let side = request.side;
        let order_type = request.order_type;

        let (result, snapshot) = task::spawn_blocking(move || {
            let mut book = book.lock().unwrap_or_else(PoisonError::into_inner);
            match_step(&mut book, &inner, order_id, side, order_type, limit, quantity)
        })
        .await
        .map_err(|e| EngineError::TaskFailed(e.to_string()))??;

        for trade in &result.trades {
            self.inner.pubsub.publish_trade(trade);
        }
        self.inner.pubsub.publish_market_data(snapshot);

        info!(
            %order_id,
            symbol = %request.symbol,
            status = ?result.status,
            trades = result.trades.len(),
            "submission settled"
        );
        Ok(result)
    }

    /// Best bid and offer; empty for symbols without a book.
    pub fn bbo(&self, symbol: &Symbol) -> Bbo {
        match self.inner.books.get(symbol) {
            Some(book) => book.lock().unwrap_or_else(PoisonError::into_inner).bbo(),
            None => Bbo::default(),
        }
    }

    /// Aggregated depth, `levels` clamped to `1..=MAX_DEPTH`.
    pub fn depth(&self, symbol: &Symbol, levels: usize) -> DepthSnapshot {
        let levels = levels.clamp(1, MAX_DEPTH);
        match self.inner.books.get(symbol) {
            Some(book) => book
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .depth(levels),
            None => DepthSnapshot::empty(symbol.clone()),
        }
    }

    pub fn subscribe_trades(&self, symbol: &Symbol) -> broadcast::Receiver<Trade> {
        self.inner.pubsub.subscribe_trades(symbol)
    }

    pub fn subscribe_market_data(&self, symbol: &Symbol) -> broadcast::Receiver<MarketDataSnapshot> {
        self.inner.pubsub.subscribe_market_data(symbol)
    }

    fn book(&self, symbol: &Symbol) -> Arc<Mutex<OrderBook>> {
        self.inner
            .books
            .entry(symbol.clone())
            .or_insert_with(|| Arc::new(Mutex::new(OrderBook::new(symbol.clone()))))
            .clone()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn validate(request: &OrderRequest) -> Result<(Quantity, Option<Price>), RejectReason> {
    let quantity = Quantity::try_new(request.quantity).ok_or(RejectReason::InvalidQuantity)?;
    let limit = if request.order_type.requires_price() {
        let raw = request.price.ok_or(RejectReason::MissingPrice)?;
        Some(Price::try_new(raw).ok_or(RejectReason::InvalidPrice)?)
    } else {
        // A market order's price, if supplied, is ignored.
        None
    };
    Ok((quantity, limit))
}

/// One uninterruptible matching step, run under the symbol lock.
fn match_step(
    book: &mut OrderBook,
    inner: &EngineInner,
    order_id: OrderId,
    side: Side,
    order_type: OrderType,
    limit: Option<Price>,
    quantity: Quantity,
) -> Result<(SubmissionResult, MarketDataSnapshot), EngineError> {
    if book.is_quarantined() {
        return Err(EngineError::SymbolQuarantined {
            symbol: book.symbol().to_string(),
        });
    }
    let timestamp = now_nanos();

    if order_type == OrderType::Fok {
        let fillable = limit.is_some_and(|l| fok_fillable(book, side, l, quantity));
        if !fillable {
            let result =
                SubmissionResult::rejected(order_id, quantity, RejectReason::InsufficientLiquidity);
            let snapshot = book.market_data(inner.snapshot_depth, timestamp);
            return Ok((result, snapshot));
        }
    }

    let mut taker = TakerOrder::new(order_id, side, order_type, limit, quantity);
    let trades = match sweep(book, &mut taker, &inner.trade_seq, timestamp) {
        Ok(trades) => trades,
        Err(err) => {
            book.set_quarantined();
            error!(symbol = %book.symbol(), %err, "matching step aborted, book quarantined");
            return Err(err);
        }
    };

    let remaining = taker.remaining;
    let status = if remaining.is_zero() {
        SubmissionStatus::Filled
    } else {
        match order_type {
            OrderType::Limit => {
                if let Some(price) = limit {
                    book.rest(side, price, order_id, remaining);
                }
                SubmissionStatus::Accepted
            }
            OrderType::Market | OrderType::Ioc | OrderType::Fok => SubmissionStatus::Canceled,
        }
    };

    let result = SubmissionResult::executed(status, order_id, taker.filled(), remaining, trades);
    let snapshot = book.market_data(inner.snapshot_depth, timestamp);
    Ok((result, snapshot))
}

fn now_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as i64
}
