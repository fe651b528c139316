//! Order types for the limit order book.
//!
//! An [`Order`] has an immutable identity (identifier, side, limit price,
//! timestamp) and a mutable remaining quantity that the engine decrements as
//! the order trades. Construction validates every field, so an `Order` value
//! always satisfies `price > 0` and `quantity > 0`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::types::price::{decimal_to_fixed, from_fixed_trimmed};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Encoded as u8 for the book state root:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy order (bid) - rests on the bid side
    Buy,
    /// Sell order (ask) - rests on the ask side
    Sell,
}

impl Side {
    /// Stable byte encoding
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Decode from the stable byte encoding
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Whether an incoming order on this side with `limit` may trade against
    /// the opposite side's `best` price.
    ///
    /// Equality at the touch is tradeable.
    ///
    /// ```
    /// use limit_order_book::types::Side;
    ///
    /// assert!(Side::Buy.crosses(105, 100));
    /// assert!(Side::Buy.crosses(100, 100));
    /// assert!(!Side::Sell.crosses(101, 100));
    /// ```
    #[inline]
    pub fn crosses(self, limit: u64, best: u64) -> bool {
        match self {
            Side::Buy => limit >= best,
            Side::Sell => limit <= best,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("BUY"),
            Side::Sell => f.write_str("SELL"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A limit, good-till-cancel order.
///
/// ## Example
///
/// ```
/// use limit_order_book::types::{Order, Side};
/// use limit_order_book::types::price::from_whole;
///
/// let order = Order::new("B1", Side::Buy, from_whole(100).unwrap(), 10, 1703577600000).unwrap();
/// assert_eq!(order.remaining(), 10);
/// assert!(Order::new("B2", Side::Buy, 0, 10, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    /// Caller-assigned identifier, unique within a book
    id: String,

    side: Side,

    /// Limit price in fixed-point (scaled by 10^8)
    price: u64,

    /// Quantity at submission
    quantity: u64,

    /// Quantity not yet traded
    remaining: u64,

    /// Caller-supplied arrival timestamp; informational only, queue position
    /// already encodes arrival order
    timestamp: u64,
}

impl Order {
    /// Create a new limit order
    ///
    /// # Errors
    ///
    /// Rejects an empty identifier, a zero price or a zero quantity.
    pub fn new(
        id: impl Into<String>,
        side: Side,
        price: u64,
        quantity: u64,
        timestamp: u64,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        if id.is_empty() {
            return Err(OrderError::EmptyIdentifier);
        }
        if price == 0 {
            return Err(OrderError::NonPositivePrice { id });
        }
        if quantity == 0 {
            return Err(OrderError::NonPositiveQuantity { id });
        }

        Ok(Self {
            id,
            side,
            price,
            quantity,
            remaining: quantity,
            timestamp,
        })
    }

    /// Create a new limit order from a decimal price
    ///
    /// ```
    /// use std::str::FromStr;
    /// use rust_decimal::Decimal;
    /// use limit_order_book::types::{Order, Side};
    ///
    /// let price = Decimal::from_str("100.5").unwrap();
    /// let order = Order::from_decimal("S1", Side::Sell, price, 3, 0).unwrap();
    /// assert_eq!(order.price(), 10_050_000_000);
    /// ```
    pub fn from_decimal(
        id: impl Into<String>,
        side: Side,
        price: Decimal,
        quantity: u64,
        timestamp: u64,
    ) -> Result<Self, OrderError> {
        let id = id.into();
        if price <= Decimal::ZERO {
            return Err(if id.is_empty() {
                OrderError::EmptyIdentifier
            } else {
                OrderError::NonPositivePrice { id }
            });
        }
        match decimal_to_fixed(price) {
            Some(fixed) => Self::new(id, side, fixed, quantity, timestamp),
            None if id.is_empty() => Err(OrderError::EmptyIdentifier),
            None => Err(OrderError::PriceOutOfRange { id }),
        }
    }

    /// Re-check the construction invariants against the current state.
    ///
    /// An order that has already been fully filled is no longer valid for
    /// submission.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyIdentifier);
        }
        if self.price == 0 {
            return Err(OrderError::NonPositivePrice { id: self.id.clone() });
        }
        if self.remaining == 0 {
            return Err(OrderError::NonPositiveQuantity { id: self.id.clone() });
        }
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Limit price in fixed-point
    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Quantity at submission
    #[inline]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Quantity not yet traded
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Check if the order is fully filled
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Get the filled quantity
    #[inline]
    pub fn filled_quantity(&self) -> u64 {
        self.quantity - self.remaining
    }

    /// Fill a portion of this order
    ///
    /// Returns the quantity actually filled, which is capped at `remaining`.
    pub(crate) fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.remaining);
        self.remaining -= actual_fill;
        actual_fill
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id={}, side={}, price={}, qty={}, timestamp={})",
            self.id,
            self.side,
            from_fixed_trimmed(self.price),
            self.remaining,
            self.timestamp
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
