//! Price level with a FIFO queue of resting orders.
//!
//! Time priority within a price is strictly arrival order; nothing here may
//! reorder the queue. The cached total always equals the sum of the queued
//! orders' remaining quantities.

use std::collections::VecDeque;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};

/// A resting limit order inside a price level queue.
#[derive(Debug, Clone)]
pub struct RestingOrder {
    pub order_id: OrderId,
    pub remaining_quantity: Quantity,
    pub arrival_sequence: u64,
}

/// All resting orders at one price, in arrival order.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    orders: VecDeque<RestingOrder>,
    total_quantity: Quantity,
}

impl PriceLevel {
    pub fn new(price: Price) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
            total_quantity: Quantity::zero(),
        }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Push an order to the tail of the queue.
    pub fn append(&mut self, order: RestingOrder) {
        self.total_quantity = self.total_quantity + order.remaining_quantity;
        self.orders.push_back(order);
    }

    pub fn peek_front(&self) -> Option<&RestingOrder> {
        self.orders.front()
    }

    /// Consume `qty` from the front order, popping it once fully filled.
    ///
    /// Returns the maker's order id, or `None` when the queue is empty or
    /// `qty` exceeds the front order's remaining quantity — the caller
    /// treats `None` as an invariant fault.
    pub fn consume_front(&mut self, qty: Quantity) -> Option<OrderId> {
        let front = self.orders.front_mut()?;
        let new_remaining = front.remaining_quantity.checked_sub(qty)?;
        let new_total = self.total_quantity.checked_sub(qty)?;

        let order_id = front.order_id;
        front.remaining_quantity = new_remaining;
        self.total_quantity = new_total;

        if new_remaining.is_zero() {
            self.orders.pop_front();
        }
        Some(order_id)
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total(&self) -> Quantity {
        self.total_quantity
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RestingOrder> {
        self.orders.iter()
    }
}
