//! Core data types for the limit order book
//!
//! ## Types
//!
//! - [`Order`]: A limit, good-till-cancel order
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: An executed trade between a resting and an incoming order
//!
//! ## Fixed-Point Prices
//!
//! Prices are stored as `u64` scaled by 10^8 (see [`price`]).
//! Example: 100.25 is stored as 10_025_000_000u64.
//! Quantities are plain integers.

mod order;
mod trade;
pub mod price;

pub use order::{Order, Side};
pub use trade::Trade;
