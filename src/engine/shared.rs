//! Lock-guarded engine handle for multi-producer environments.
//!
//! The whole engine sits behind one `RwLock`: a submission holds the write
//! lock from validation until the remainder has rested, so no reader ever
//! observes a half-applied trade. Queries share the read lock and hand back
//! owned values.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{MatchResult, MatchingEngine};
use crate::error::EngineError;
use crate::types::Order;

/// Cloneable handle to a single shared [`MatchingEngine`].
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<MatchingEngine>>,
}

impl SharedEngine {
    pub fn new(engine: MatchingEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Submit under the exclusive lock
    pub fn submit(&self, order: Order) -> Result<MatchResult, EngineError> {
        self.inner.write().submit(order)
    }

    pub fn best_bid(&self) -> Option<u64> {
        self.inner.read().best_bid()
    }

    pub fn best_ask(&self) -> Option<u64> {
        self.inner.read().best_ask()
    }

    /// Snapshot of a resting order
    pub fn lookup(&self, order_id: &str) -> Option<Order> {
        self.inner.read().lookup(order_id).cloned()
    }

    /// Run a read-only closure against a consistent view of the engine
    pub fn read<R>(&self, f: impl FnOnce(&MatchingEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<MatchingEngine> for SharedEngine {
    fn from(engine: MatchingEngine) -> Self {
        Self::new(engine)
    }
}
