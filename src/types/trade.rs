//! Trade type representing an executed match between two orders.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::price::fixed_to_decimal;
use crate::types::Side;

/// A trade represents a single match between a maker and taker order.
///
/// ## Terminology
///
/// - **Maker**: The resting order that was already in the book
/// - **Taker**: The incoming order that triggered the match
///
/// ## Price Discovery
///
/// The trade always executes at the maker's price (the resting order's price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    /// Per-engine sequence number, starting at 1; a later trade always has a
    /// larger id
    pub id: u64,

    /// Resting order identifier
    pub maker_order_id: String,

    /// Incoming order identifier
    pub taker_order_id: String,

    /// Side of the incoming order
    pub taker_side: Side,

    /// Execution price in fixed-point (scaled by 10^8)
    /// Always the maker's price
    pub price: u64,

    /// Executed quantity
    pub quantity: u64,

    /// Timestamp carried by the incoming order
    pub timestamp: u64,
}

impl Trade {
    /// Notional value of this trade (price * quantity)
    ///
    /// ```
    /// use limit_order_book::types::{Side, Trade};
    /// use limit_order_book::types::price::from_whole;
    /// use rust_decimal::Decimal;
    ///
    /// let trade = Trade {
    ///     id: 1,
    ///     maker_order_id: "S1".into(),
    ///     taker_order_id: "B1".into(),
    ///     taker_side: Side::Buy,
    ///     price: from_whole(100).unwrap(),
    ///     quantity: 5,
    ///     timestamp: 0,
    /// };
    /// assert_eq!(trade.notional(), Decimal::from(500));
    /// ```
    pub fn notional(&self) -> Decimal {
        fixed_to_decimal(self.price) * Decimal::from(self.quantity)
    }
}
