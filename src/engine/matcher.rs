//! Price-time priority matching.
//!
//! [`MatchingEngine`] owns the [`OrderBook`] and is the only thing that
//! mutates it. A submission is validated first, then crossed against the
//! opposite side best level first and oldest order first, and whatever is
//! left rests at the tail of its own price level.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::{DuplicatePolicy, EngineConfig};
use crate::engine::{BookEvent, EventSink};
use crate::error::EngineError;
use crate::orderbook::OrderBook;
use crate::types::price::from_fixed_trimmed;
use crate::types::{Order, Trade};

/// Outcome of a single [`MatchingEngine::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Identifier of the submitted order
    pub order_id: String,

    /// Trades in execution order
    pub trades: Vec<Trade>,

    /// Quantity traded by this submission
    pub filled_quantity: u64,

    /// Quantity left after matching (resting if > 0)
    pub remaining: u64,

    /// The submitted order was completely consumed
    pub fully_filled: bool,

    /// The remainder was added to the book
    pub rested: bool,
}

impl MatchResult {
    /// At least one trade occurred
    pub fn traded(&self) -> bool {
        !self.trades.is_empty()
    }
}

/// Single-instrument matching engine.
///
/// ## Example
///
/// ```
/// use limit_order_book::MatchingEngine;
/// use limit_order_book::types::{Order, Side};
/// use limit_order_book::types::price::from_whole;
///
/// let mut engine = MatchingEngine::new();
///
/// let sell = Order::new("S1", Side::Sell, from_whole(100).unwrap(), 5, 0).unwrap();
/// engine.submit(sell).unwrap();
///
/// let buy = Order::new("B1", Side::Buy, from_whole(105).unwrap(), 5, 1).unwrap();
/// let result = engine.submit(buy).unwrap();
///
/// assert!(result.fully_filled);
/// assert_eq!(result.trades.len(), 1);
/// assert_eq!(result.trades[0].price, from_whole(100).unwrap());
/// assert_eq!(engine.best_bid(), None);
/// assert_eq!(engine.best_ask(), None);
/// ```
pub struct MatchingEngine {
    config: EngineConfig,

    book: OrderBook,

    /// Identifiers that were accepted and have since left the book
    /// (only tracked under `DuplicatePolicy::RejectHistorical`)
    retired_ids: HashSet<String>,

    /// Next trade ID
    next_trade_id: u64,

    /// Accepted submissions
    submitted: u64,

    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchingEngine")
            .field("config", &self.config)
            .field("book", &self.book)
            .field("retired_ids", &self.retired_ids.len())
            .field("next_trade_id", &self.next_trade_id)
            .field("submitted", &self.submitted)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl MatchingEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            book: OrderBook::with_capacity(config.order_capacity),
            config,
            retired_ids: HashSet::new(),
            next_trade_id: 1,
            submitted: 0,
            sinks: Vec::new(),
        }
    }

    /// Register a diagnostic sink
    pub fn add_sink(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Submit a limit order.
    ///
    /// The order trades against the opposite side while it crosses, then any
    /// remainder rests in the book. Finding nothing to trade against is not
    /// an error.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidOrder`] if the order has no identifier, no
    ///   price, or nothing left to fill
    /// - [`EngineError::DuplicateIdentifier`] if the identifier is resting,
    ///   or was seen before under [`DuplicatePolicy::RejectHistorical`]
    ///
    /// A rejected submission leaves the book untouched.
    pub fn submit(&mut self, mut order: Order) -> Result<MatchResult, EngineError> {
        if let Err(error) = self.admit(&order) {
            warn!(order_id = order.id(), %error, "order rejected");
            self.emit(|| BookEvent::Rejected {
                order_id: order.id().to_string(),
                error: error.clone(),
            });
            return Err(error);
        }
        self.submitted += 1;

        let trades = self.match_incoming(&mut order);
        let filled_quantity: u64 = trades.iter().map(|t| t.quantity).sum();
        let remaining = order.remaining();
        let order_id = order.id().to_string();

        if remaining > 0 {
            debug!(
                order_id = order.id(),
                side = %order.side(),
                price = %from_fixed_trimmed(order.price()),
                remaining,
                "order rested"
            );
            self.emit(|| BookEvent::Rested {
                order_id: order.id().to_string(),
                side: order.side(),
                price: order.price(),
                remaining,
            });
            self.book.insert(order);
        } else {
            debug!(order_id = order.id(), "incoming order filled");
            self.retire(order.id());
            self.emit(|| BookEvent::Filled {
                order_id: order.id().to_string(),
                side: order.side(),
            });
        }

        Ok(MatchResult {
            order_id,
            trades,
            filled_quantity,
            remaining,
            fully_filled: remaining == 0,
            rested: remaining > 0,
        })
    }

    /// Validation performed before any mutation
    fn admit(&self, order: &Order) -> Result<(), EngineError> {
        order.validate()?;

        let id = order.id();
        let seen = match self.config.duplicate_policy {
            DuplicatePolicy::RejectHistorical => {
                self.book.contains(id) || self.retired_ids.contains(id)
            }
            DuplicatePolicy::RejectResting => self.book.contains(id),
        };
        if seen {
            return Err(EngineError::DuplicateIdentifier(id.to_string()));
        }
        Ok(())
    }

    /// Cross `incoming` against the opposite side until it is filled or the
    /// best opposite price no longer crosses.
    ///
    /// Each iteration consumes from the head of the best level only, so a
    /// better level is always exhausted before a worse one is touched.
    fn match_incoming(&mut self, incoming: &mut Order) -> Vec<Trade> {
        let mut trades = Vec::new();
        let side = incoming.side();
        let opposite = side.opposite();

        while incoming.remaining() > 0 {
            let Some(best) = self.book.side(opposite).best_price() else {
                trace!(order_id = incoming.id(), "opposite side empty");
                break;
            };
            if !side.crosses(incoming.price(), best) {
                trace!(
                    order_id = incoming.id(),
                    limit = %from_fixed_trimmed(incoming.price()),
                    best = %from_fixed_trimmed(best),
                    "no cross"
                );
                break;
            }
            let Some(fill) = self.book.fill_best(opposite, incoming.remaining()) else {
                break;
            };
            incoming.fill(fill.quantity);

            let trade = Trade {
                id: self.next_trade_id(),
                maker_order_id: fill.maker_order_id,
                taker_order_id: incoming.id().to_string(),
                taker_side: side,
                price: fill.price,
                quantity: fill.quantity,
                timestamp: incoming.timestamp(),
            };
            debug!(
                trade_id = trade.id,
                maker = %trade.maker_order_id,
                taker = %trade.taker_order_id,
                price = %from_fixed_trimmed(trade.price),
                quantity = trade.quantity,
                "trade"
            );
            self.emit(|| BookEvent::Trade(trade.clone()));

            if fill.maker_remaining == 0 {
                self.retire(&trade.maker_order_id);
                self.emit(|| BookEvent::Filled {
                    order_id: trade.maker_order_id.clone(),
                    side: opposite,
                });
            }
            trades.push(trade);
        }

        trades
    }

    fn retire(&mut self, order_id: &str) {
        if self.config.duplicate_policy == DuplicatePolicy::RejectHistorical {
            self.retired_ids.insert(order_id.to_string());
        }
    }

    fn emit(&mut self, event: impl FnOnce() -> BookEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let event = event();
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }

    #[inline]
    fn next_trade_id(&mut self) -> u64 {
        let id = self.next_trade_id;
        self.next_trade_id += 1;
        id
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Highest resting buy price
    #[inline]
    pub fn best_bid(&self) -> Option<u64> {
        self.book.best_bid()
    }

    /// Lowest resting sell price
    #[inline]
    pub fn best_ask(&self) -> Option<u64> {
        self.book.best_ask()
    }

    /// Resting order with this identifier.
    ///
    /// Never-submitted and already-filled identifiers are both `None`.
    #[inline]
    pub fn lookup(&self, order_id: &str) -> Option<&Order> {
        self.book.get(order_id)
    }

    /// Read-only access to the resting book
    #[inline]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Trades executed so far
    #[inline]
    pub fn trade_count(&self) -> u64 {
        self.next_trade_id - 1
    }

    /// Submissions accepted so far
    #[inline]
    pub fn submitted_count(&self) -> u64 {
        self.submitted
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
