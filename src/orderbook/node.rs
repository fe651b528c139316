//! Slab entry for a resting order.
//!
//! A price level does not own its orders; it threads a doubly-linked queue
//! through the slab by storing neighbour keys on each entry. `prev` points
//! toward the head (older), `next` toward the tail (newer).

use crate::types::Order;

#[derive(Debug, Clone)]
pub struct OrderNode {
    pub order: Order,

    /// Older neighbour at the same price; None at the head
    pub prev: Option<usize>,

    /// Newer neighbour at the same price; None at the tail
    pub next: Option<usize>,
}

impl OrderNode {
    #[inline]
    pub fn new(order: Order) -> Self {
        Self {
            order,
            prev: None,
            next: None,
        }
    }

    /// True when the node has no neighbours (detached, or alone in its level)
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// Clear both links and hand back the old `(prev, next)` keys
    #[inline]
    pub fn detach(&mut self) -> (Option<usize>, Option<usize>) {
        (self.prev.take(), self.next.take())
    }
}
