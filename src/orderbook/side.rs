//! One side of the book: price levels sorted by price.
//!
//! Both sides share the same ascending `BTreeMap`; only the end that counts
//! as "best" differs:
//!
//! - **Bids** (buy orders): best = highest price = last key
//! - **Asks** (sell orders): best = lowest price = first key

use std::collections::BTreeMap;

use slab::Slab;

use crate::orderbook::{OrderNode, PriceLevel};
use crate::types::Side;

/// Aggregated view of one price level, as returned by depth queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLevel {
    pub price: u64,
    /// Aggregate remaining quantity; may exceed `u64::MAX`
    pub total_quantity: u128,
    pub order_count: usize,
}

impl From<&PriceLevel> for DepthLevel {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price,
            total_quantity: level.total_quantity,
            order_count: level.order_count,
        }
    }
}

/// Price levels for a single side of the book.
///
/// A level is present if and only if it holds at least one order.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    levels: BTreeMap<u64, PriceLevel>,
    order_count: usize,
}

impl BookSide {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            order_count: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of resting orders on this side
    #[inline]
    pub fn order_count(&self) -> usize {
        self.order_count
    }

    /// Number of distinct price levels
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Most aggressive resting price on this side
    pub fn best_price(&self) -> Option<u64> {
        self.best_level().map(|level| level.price)
    }

    pub fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values().next_back(),
            Side::Sell => self.levels.values().next(),
        }
    }

    pub(crate) fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Buy => self.levels.values_mut().next_back(),
            Side::Sell => self.levels.values_mut().next(),
        }
    }

    pub fn level(&self, price: u64) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    /// Levels ordered best-first
    pub fn levels(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    /// Up to `max_levels` levels, best-first
    pub fn depth(&self, max_levels: usize) -> Vec<DepthLevel> {
        self.levels().take(max_levels).map(DepthLevel::from).collect()
    }

    /// Append a stored order to the level at its price, creating the level
    /// if needed
    pub(crate) fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let Some(price) = slab.get(key).map(|node| node.order.price()) else {
            debug_assert!(false, "push_back: slab key {key} not present");
            return;
        };
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(key, slab);
        self.order_count += 1;
    }

    /// Unlink a stored order from its level, dropping the level if it becomes
    /// empty. The node stays in the slab.
    pub(crate) fn unlink(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Option<u64> {
        let price = slab.get(key)?.order.price();
        let level = self.levels.get_mut(&price)?;
        let quantity = level.remove(key, slab)?;
        if level.is_empty() {
            self.levels.remove(&price);
        }
        self.order_count -= 1;
        Some(quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
