//! End-to-end submission scenarios through the engine API.

use matching_engine::MatchingEngine;
use rust_decimal::Decimal;
use types::ids::Symbol;
use types::numeric::{Price, Quantity};
use types::order::{OrderRequest, Side, SubmissionStatus};

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn symbol() -> Symbol {
    Symbol::from("BTC-USDT")
}

#[tokio::test]
async fn test_fifo_within_price_level() {
    let engine = MatchingEngine::default();
    let s1 = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();
    let s2 = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::market("BTC-USDT", Side::Buy, dec(1)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Filled);
    assert_eq!(result.trades.len(), 1);
    assert_eq!(result.trades[0].price, Price::from_u64(100));
    assert_eq!(result.trades[0].quantity, Quantity::from_u64(1));
    assert_eq!(result.trades[0].maker_order_id, s1.order_id);
    assert_eq!(result.trades[0].taker_order_id, result.order_id);
    assert_ne!(result.trades[0].maker_order_id, s2.order_id);

    // The second seller still rests with its full quantity.
    let depth = engine.depth(&symbol(), 10);
    assert_eq!(
        depth.asks,
        vec![(Price::from_u64(100), Quantity::from_u64(1))]
    );
}

#[tokio::test]
async fn test_earlier_order_fully_consumed_before_later_one() {
    let engine = MatchingEngine::default();
    let first = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(2), dec(100)))
        .await
        .unwrap();
    let second = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(2), dec(100)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Buy, dec(3), dec(100)))
        .await
        .unwrap();

    assert_eq!(result.trades.len(), 2);
    assert_eq!(result.trades[0].maker_order_id, first.order_id);
    assert_eq!(result.trades[0].quantity, Quantity::from_u64(2));
    assert_eq!(result.trades[1].maker_order_id, second.order_id);
    assert_eq!(result.trades[1].quantity, Quantity::from_u64(1));
}

#[tokio::test]
async fn test_ioc_partial_cancels_remainder() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(2), dec(101)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::ioc("BTC-USDT", Side::Buy, dec(5), dec(101)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Canceled);
    assert_eq!(result.trades.len(), 1);
    assert_eq!(result.trades[0].price, Price::from_u64(101));
    assert_eq!(result.trades[0].quantity, Quantity::from_u64(2));
    assert_eq!(result.filled_quantity, Quantity::from_u64(2));
    assert_eq!(result.remaining_quantity, Quantity::from_u64(3));

    // The residual was discarded, not rested.
    let depth = engine.depth(&symbol(), 10);
    assert!(depth.bids.is_empty());
    assert!(depth.asks.is_empty());
}

#[tokio::test]
async fn test_fok_rejects_when_liquidity_insufficient() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(102)))
        .await
        .unwrap();

    let before = engine.depth(&symbol(), 10);
    let result = engine
        .submit(OrderRequest::fok("BTC-USDT", Side::Buy, dec(3), dec(101)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Rejected);
    assert!(result.trades.is_empty());
    assert!(result.filled_quantity.is_zero());

    // Zero side effects: both sells still resting, book unchanged.
    let after = engine.depth(&symbol(), 10);
    assert_eq!(before, after);
    assert_eq!(after.asks.len(), 2);
}

#[tokio::test]
async fn test_fok_fills_across_levels() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(2), dec(101)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::fok("BTC-USDT", Side::Buy, dec(3), dec(101)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Filled);
    assert_eq!(result.trades.len(), 2);
    assert_eq!(result.trades[0].price, Price::from_u64(100));
    assert_eq!(result.trades[0].quantity, Quantity::from_u64(1));
    assert_eq!(result.trades[1].price, Price::from_u64(101));
    assert_eq!(result.trades[1].quantity, Quantity::from_u64(2));

    let depth = engine.depth(&symbol(), 10);
    assert!(depth.asks.is_empty());
}

#[tokio::test]
async fn test_market_cancels_on_exhaustion() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::market("BTC-USDT", Side::Buy, dec(3)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Canceled);
    assert_eq!(result.trades.len(), 1);
    assert_eq!(result.trades[0].price, Price::from_u64(100));
    assert_eq!(result.filled_quantity, Quantity::from_u64(1));
    assert_eq!(result.remaining_quantity, Quantity::from_u64(2));

    let depth = engine.depth(&symbol(), 10);
    assert!(depth.asks.is_empty());
    assert!(depth.bids.is_empty());
}

#[tokio::test]
async fn test_limit_rests_after_partial_cross() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(1), dec(100)))
        .await
        .unwrap();

    let result = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Buy, dec(3), dec(100)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Accepted);
    assert_eq!(result.trades.len(), 1);
    assert_eq!(result.trades[0].price, Price::from_u64(100));
    assert_eq!(result.trades[0].quantity, Quantity::from_u64(1));
    assert_eq!(result.filled_quantity, Quantity::from_u64(1));
    assert_eq!(result.remaining_quantity, Quantity::from_u64(2));

    let depth = engine.depth(&symbol(), 10);
    assert_eq!(
        depth.bids,
        vec![(Price::from_u64(100), Quantity::from_u64(2))]
    );
    assert!(depth.asks.is_empty());
}

#[tokio::test]
async fn test_filled_quantity_equals_sum_of_trades() {
    let engine = MatchingEngine::default();
    for (price, qty) in [(100, 1), (101, 2), (102, 4)] {
        engine
            .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(qty), dec(price)))
            .await
            .unwrap();
    }

    let result = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Buy, dec(6), dec(102)))
        .await
        .unwrap();

    let traded = result
        .trades
        .iter()
        .fold(Quantity::zero(), |acc, t| acc + t.quantity);
    assert_eq!(traded, result.filled_quantity);
    assert_eq!(traded, Quantity::from_u64(6));
    assert_eq!(result.status, SubmissionStatus::Filled);

    // Residual maker liquidity stays on the book.
    let depth = engine.depth(&symbol(), 10);
    assert_eq!(
        depth.asks,
        vec![(Price::from_u64(102), Quantity::from_u64(1))]
    );
}

#[tokio::test]
async fn test_sell_side_mirror_semantics() {
    let engine = MatchingEngine::default();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Buy, dec(1), dec(102)))
        .await
        .unwrap();
    engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Buy, dec(1), dec(100)))
        .await
        .unwrap();

    // A sell limited to 101 takes the 102 bid and leaves the 100 bid.
    let result = engine
        .submit(OrderRequest::limit("BTC-USDT", Side::Sell, dec(2), dec(101)))
        .await
        .unwrap();

    assert_eq!(result.status, SubmissionStatus::Accepted);
    assert_eq!(result.trades.len(), 1);
    assert_eq!(result.trades[0].price, Price::from_u64(102));
    assert_eq!(result.remaining_quantity, Quantity::from_u64(1));

    let depth = engine.depth(&symbol(), 10);
    assert_eq!(
        depth.bids,
        vec![(Price::from_u64(100), Quantity::from_u64(1))]
    );
    assert_eq!(
        depth.asks,
        vec![(Price::from_u64(101), Quantity::from_u64(1))]
    );
}
