//! Order book storage.
//!
//! ## Architecture
//!
//! The book uses a hybrid data structure:
//!
//! - **Slab**: Pre-allocated storage for resting orders, O(1) insert/remove
//! - **BookSide**: Sorted price levels per side, O(log n) level lookup
//! - **HashMap**: Order ID to slab key, O(1) lookup by identifier
//!
//! An order is in the identifier index if and only if it sits in exactly one
//! level queue on exactly one side. All three structures are private; the
//! matching engine is the only writer.
//!
//! ## Example
//!
//! ```
//! use limit_order_book::MatchingEngine;
//! use limit_order_book::types::{Order, Side};
//! use limit_order_book::types::price::from_whole;
//!
//! let mut engine = MatchingEngine::new();
//! engine.submit(Order::new("1", Side::Buy, from_whole(100).unwrap(), 10, 0).unwrap()).unwrap();
//! engine.submit(Order::new("2", Side::Sell, from_whole(105).unwrap(), 7, 0).unwrap()).unwrap();
//!
//! let book = engine.book();
//! assert_eq!(book.best_bid(), from_whole(100));
//! assert_eq!(book.best_ask(), from_whole(105));
//! assert_eq!(book.spread(), from_whole(5));
//! ```

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::orderbook::{BookSide, DepthLevel, OrderNode};
use crate::types::{Order, Side};

/// Outcome of trading against the head of the best level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fill {
    pub maker_order_id: String,
    pub price: u64,
    pub quantity: u64,
    /// Maker quantity left after this fill; 0 means it left the book
    pub maker_remaining: u64,
}

/// Resting state of a single-instrument limit order book.
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Pre-allocated order storage
    /// Key: slab index, Value: OrderNode
    orders: Slab<OrderNode>,

    /// Bid price levels (best = highest)
    bids: BookSide,

    /// Ask price levels (best = lowest)
    asks: BookSide,

    /// Order ID to slab key mapping
    order_index: HashMap<String, usize>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a book with pre-allocated capacity
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(order_capacity),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            order_index: HashMap::with_capacity(order_capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    /// Get the current capacity (pre-allocated slots)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Get the total number of resting orders
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.order_count()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.order_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[inline]
    pub fn bid_levels(&self) -> usize {
        self.bids.level_count()
    }

    #[inline]
    pub fn ask_levels(&self) -> usize {
        self.asks.level_count()
    }

    /// Read-only view of one side
    pub fn side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    // ========================================================================
    // Best Bid/Ask
    // ========================================================================

    /// Highest resting buy price, or None if there are no bids
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.best_price()
    }

    /// Lowest resting sell price, or None if there are no asks
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.best_price()
    }

    /// Get the spread (best_ask - best_bid)
    ///
    /// Returns None if either side is empty.
    pub fn spread(&self) -> Option<u64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => ask.checked_sub(bid),
            _ => None,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Resting order with this identifier
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        let key = *self.order_index.get(order_id)?;
        self.orders.get(key).map(|node| &node.order)
    }

    #[inline]
    pub fn contains(&self, order_id: &str) -> bool {
        self.order_index.contains_key(order_id)
    }

    /// Up to `max_levels` aggregated levels of one side, best-first
    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<DepthLevel> {
        self.side(side).depth(max_levels)
    }

    /// Orders queued at one price, oldest first
    pub fn level_orders(&self, side: Side, price: u64) -> Vec<&Order> {
        self.side(side)
            .level(price)
            .map(|level| level.iter(&self.orders).collect())
            .unwrap_or_default()
    }

    // ========================================================================
    // State Root
    // ========================================================================

    /// SHA-256 over the resting book in canonical order
    ///
    /// Bids then asks, each best level first and each queue oldest first.
    /// Every order contributes its identifier, price and remaining quantity,
    /// so two books with identical queues yield identical roots.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for book_side in [&self.bids, &self.asks] {
            hasher.update([book_side.side().to_u8()]);
            for level in book_side.levels() {
                for order in level.iter(&self.orders) {
                    hasher.update((order.id().len() as u64).to_le_bytes());
                    hasher.update(order.id().as_bytes());
                    hasher.update(order.price().to_le_bytes());
                    hasher.update(order.remaining().to_le_bytes());
                }
            }
        }
        hasher.finalize().into()
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root())
    }

    // ========================================================================
    // Mutation (matching engine only)
    // ========================================================================

    /// Rest an order at the tail of its price level
    ///
    /// The caller guarantees the identifier is not already indexed.
    pub(crate) fn insert(&mut self, order: Order) -> usize {
        let id = order.id().to_string();
        let side = order.side();
        let key = self.orders.insert(OrderNode::new(order));
        self.order_index.insert(id, key);

        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        book_side.push_back(key, &mut self.orders);
        key
    }

    /// Trade up to `max_quantity` against the oldest order at the best level
    /// of `side`.
    ///
    /// A maker that reaches zero is unlinked, removed from the slab and the
    /// index, and its level is dropped if it was the last order there.
    pub(crate) fn fill_best(&mut self, side: Side, max_quantity: u64) -> Option<Fill> {
        let book_side = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let orders = &mut self.orders;

        let level = book_side.best_level_mut()?;
        let key = level.front()?;
        let node = orders.get_mut(key)?;

        let maker = &mut node.order;
        let quantity = maker.fill(max_quantity);
        level.consume(quantity);

        let fill = Fill {
            maker_order_id: maker.id().to_string(),
            price: maker.price(),
            quantity,
            maker_remaining: maker.remaining(),
        };

        if fill.maker_remaining == 0 {
            book_side.unlink(key, orders);
            orders.remove(key);
            self.order_index.remove(&fill.maker_order_id);
        }

        Some(fill)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::from_whole;

    fn px(units: u64) -> u64 {
        from_whole(units).unwrap()
    }

    fn buy(id: &str, price: u64, quantity: u64) -> Order {
        Order::new(id, Side::Buy, px(price), quantity, 0).unwrap()
    }

    fn sell(id: &str, price: u64, quantity: u64) -> Order {
        Order::new(id, Side::Sell, px(price), quantity, 0).unwrap()
    }

    #[test]
    fn test_book_new() {
        let book = OrderBook::new();

        assert!(book.is_empty());
        assert_eq!(book.order_count(), 0);
        assert!(book.best_bid().is_none());
        assert!(book.best_ask().is_none());
        assert!(book.spread().is_none());
    }

    #[test]
    fn test_book_with_capacity() {
        let book = OrderBook::with_capacity(10_000);
        assert!(book.capacity() >= 10_000);
    }

    #[test]
    fn test_insert_indexes_and_levels() {
        let mut book = OrderBook::with_capacity(16);

        book.insert(buy("B1", 100, 10));
        book.insert(sell("S1", 105, 7));

        assert_eq!(book.order_count(), 2);
        assert_eq!(book.bid_count(), 1);
        assert_eq!(book.ask_count(), 1);
        assert_eq!(book.best_bid(), Some(px(100)));
        assert_eq!(book.best_ask(), Some(px(105)));
        assert_eq!(book.spread(), Some(px(5)));
        assert!(book.contains("B1"));
        assert_eq!(book.get("S1").map(Order::remaining), Some(7));
        assert!(book.get("missing").is_none());
    }

    #[test]
    fn test_level_orders_fifo() {
        let mut book = OrderBook::new();

        book.insert(buy("B1", 100, 5));
        book.insert(buy("B2", 100, 7));

        let queue: Vec<&str> = book.level_orders(Side::Buy, px(100)).into_iter().map(Order::id).collect();
        assert_eq!(queue, ["B1", "B2"]);
        assert!(book.level_orders(Side::Buy, px(99)).is_empty());
        assert!(book.level_orders(Side::Sell, px(100)).is_empty());
    }

    #[test]
    fn test_fill_best_partial() {
        let mut book = OrderBook::new();
        book.insert(sell("S1", 100, 10));

        let fill = book.fill_best(Side::Sell, 4).unwrap();
        assert_eq!(fill.maker_order_id, "S1");
        assert_eq!(fill.price, px(100));
        assert_eq!(fill.quantity, 4);
        assert_eq!(fill.maker_remaining, 6);

        assert_eq!(book.get("S1").map(Order::remaining), Some(6));
        assert_eq!(book.depth(Side::Sell, 1)[0].total_quantity, 6);
    }

    #[test]
    fn test_fill_best_removes_filled_maker_and_level() {
        let mut book = OrderBook::new();
        book.insert(sell("S1", 100, 5));
        book.insert(sell("S2", 101, 5));

        let fill = book.fill_best(Side::Sell, 8).unwrap();
        assert_eq!(fill.quantity, 5);
        assert_eq!(fill.maker_remaining, 0);

        assert!(!book.contains("S1"));
        assert_eq!(book.ask_levels(), 1);
        assert_eq!(book.ask_count(), 1);
        assert_eq!(book.best_ask(), Some(px(101)));
    }

    #[test]
    fn test_fill_best_empty_side() {
        let mut book = OrderBook::new();
        assert!(book.fill_best(Side::Buy, 1).is_none());
    }

    #[test]
    fn test_state_root_tracks_queue_state() {
        let mut a = OrderBook::new();
        let mut b = OrderBook::new();
        assert_eq!(a.state_root(), b.state_root());

        a.insert(buy("B1", 100, 5));
        b.insert(buy("B1", 100, 5));
        assert_eq!(a.state_root(), b.state_root());
        assert_eq!(a.state_root_hex().len(), 64);

        b.fill_best(Side::Buy, 1);
        assert_ne!(a.state_root(), b.state_root());
    }

    #[test]
    fn test_state_root_depends_on_queue_order() {
        let mut a = OrderBook::new();
        a.insert(sell("S1", 100, 5));
        a.insert(sell("S2", 100, 5));

        let mut b = OrderBook::new();
        b.insert(sell("S2", 100, 5));
        b.insert(sell("S1", 100, 5));

        assert_ne!(a.state_root(), b.state_root());
    }
}
