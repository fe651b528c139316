//! Diagnostic events emitted by the matching engine.
//!
//! Sinks observe the engine; they receive shared references only and have
//! no way to alter the book or the outcome of a submission.

use crate::error::EngineError;
use crate::types::{Side, Trade};

/// Something that happened while processing a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookEvent {
    /// An incoming order traded against a resting order
    Trade(Trade),

    /// The unfilled remainder of an incoming order was added to the book
    Rested {
        order_id: String,
        side: Side,
        price: u64,
        remaining: u64,
    },

    /// An order reached zero quantity and no longer exists in the book
    Filled { order_id: String, side: Side },

    /// A submission was rejected before touching the book
    Rejected { order_id: String, error: EngineError },
}

/// Receiver of [`BookEvent`]s.
///
/// Any `FnMut(&BookEvent)` closure that is `Send + Sync` is a sink.
pub trait EventSink: Send + Sync {
    fn on_event(&mut self, event: &BookEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&BookEvent) + Send + Sync,
{
    fn on_event(&mut self, event: &BookEvent) {
        self(event)
    }
}
