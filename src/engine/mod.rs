//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: the engine owns both sides and the identifier index
//! 2. **Fixed-Point Math**: No floating-point comparisons at the touch
//! 3. **Synchronous Execution**: No I/O or suspension inside `submit`
//! 4. **Price-Time Priority**: Best price first, then FIFO
//!
//! ## Matching Rules
//!
//! - **Buy orders** match against asks (lowest price first) while `limit >= best ask`
//! - **Sell orders** match against bids (highest price first) while `limit <= best bid`
//! - **Partial fills** are supported; trades execute at the resting price
//! - **Unfilled quantity** rests on the book
//!
//! ## Example
//!
//! ```
//! use limit_order_book::engine::MatchingEngine;
//! use limit_order_book::types::{Order, Side};
//! use limit_order_book::types::price::from_whole;
//!
//! let mut engine = MatchingEngine::new();
//!
//! engine.submit(Order::new("S1", Side::Sell, from_whole(100).unwrap(), 10, 0).unwrap()).unwrap();
//! let result = engine.submit(Order::new("B1", Side::Buy, from_whole(105).unwrap(), 4, 1).unwrap()).unwrap();
//!
//! assert!(result.fully_filled);
//! assert_eq!(engine.best_ask(), from_whole(100));
//! assert_eq!(engine.lookup("S1").map(|o| o.remaining()), Some(6));
//! ```

pub mod events;
pub mod matcher;
pub mod shared;

pub use events::{BookEvent, EventSink};
pub use matcher::{MatchResult, MatchingEngine};
pub use shared::SharedEngine;
