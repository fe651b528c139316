//! FIFO queue of resting orders sharing one price.
//!
//! The queue is a doubly-linked list threaded through the slab:
//!
//! ```text
//! front (oldest) <-> ... <-> back (newest)
//! ```
//!
//! Arrivals join at the back, matching takes from the front, and any entry
//! can be unlinked in O(1) from its slab key. `total_quantity` always equals
//! the sum of `remaining` over the queued orders; it is a `u128` so that any
//! number of `u64` quantities can share one price without overflow.

use slab::Slab;

use crate::orderbook::OrderNode;
use crate::types::Order;

/// Queue metadata for one price; order data stays in the slab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLevel {
    /// Fixed-point price shared by every queued order
    pub price: u64,

    /// Sum of the remaining quantity of every order at this level
    pub total_quantity: u128,

    /// Slab key of the oldest order
    pub head: Option<usize>,

    /// Slab key of the newest order
    pub tail: Option<usize>,

    pub order_count: usize,
}

impl PriceLevel {
    pub fn new(price: u64) -> Self {
        Self {
            price,
            total_quantity: 0,
            head: None,
            tail: None,
            order_count: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order_count == 0
    }

    /// Queue a stored order behind every order already here.
    ///
    /// Keys that are not in the slab are ignored.
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<OrderNode>) {
        let Some(node) = slab.get_mut(key) else {
            debug_assert!(false, "push_back: slab key {key} not present");
            return;
        };
        let quantity = node.order.remaining();
        node.prev = self.tail;
        node.next = None;

        match self.tail.and_then(|back| slab.get_mut(back)) {
            Some(back) => back.next = Some(key),
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.order_count += 1;
        self.total_quantity += u128::from(quantity);
    }

    /// Take a stored order out of the queue, returning its remaining
    /// quantity. The entry itself is left in the slab.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<OrderNode>) -> Option<u64> {
        let node = slab.get_mut(key)?;
        let quantity = node.order.remaining();
        let (older, newer) = node.detach();

        match older.and_then(|k| slab.get_mut(k)) {
            Some(older_node) => older_node.next = newer,
            None => self.head = newer,
        }
        match newer.and_then(|k| slab.get_mut(k)) {
            Some(newer_node) => newer_node.prev = older,
            None => self.tail = older,
        }

        self.order_count -= 1;
        self.total_quantity -= u128::from(quantity);
        Some(quantity)
    }

    /// Slab key of the order that trades next
    #[inline]
    pub fn front(&self) -> Option<usize> {
        self.head
    }

    /// Account for `quantity` traded out of the front order
    #[inline]
    pub fn consume(&mut self, quantity: u64) {
        self.total_quantity -= u128::from(quantity);
    }

    /// Iterate the queue from oldest to newest
    pub fn iter<'a>(&self, slab: &'a Slab<OrderNode>) -> LevelIter<'a> {
        LevelIter {
            slab,
            cursor: self.head,
        }
    }
}

/// Front-to-back iterator over the orders of one level.
pub struct LevelIter<'a> {
    slab: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for LevelIter<'a> {
    type Item = &'a Order;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slab.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.order)
    }
}
