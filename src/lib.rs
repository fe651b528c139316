//! # Limit Order Book
//!
//! Single-instrument limit order book with price-time priority matching.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, Trade, fixed-point prices)
//! - **OrderBook**: Price levels per side with slab-based FIFO queues
//! - **Engine**: Matching engine owning the book, plus a lock-guarded handle
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical submission sequences produce identical books
//! 2. **No Floating Point**: Prices use fixed-point arithmetic (10^8 scaling)
//! 3. **Pre-allocated Memory**: Slab allocation for O(1) order storage
//! 4. **Synchronous Execution**: `submit` runs to completion without I/O
//!
//! ## Example
//!
//! ```
//! use limit_order_book::{MatchingEngine, Order, Side};
//! use limit_order_book::types::price::from_whole;
//!
//! let mut engine = MatchingEngine::new();
//! engine.submit(Order::new("S1", Side::Sell, from_whole(100).unwrap(), 5, 0).unwrap()).unwrap();
//! engine.submit(Order::new("S2", Side::Sell, from_whole(101).unwrap(), 5, 0).unwrap()).unwrap();
//!
//! let result = engine.submit(Order::new("B1", Side::Buy, from_whole(105).unwrap(), 6, 0).unwrap()).unwrap();
//! assert_eq!(result.trades.len(), 2);
//! assert_eq!(engine.best_ask(), from_whole(101));
//! assert_eq!(engine.lookup("S2").map(|o| o.remaining()), Some(4));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Side, Trade
pub mod types;

/// Order book: price levels with slab-based storage
pub mod orderbook;

/// Matching engine: submission, queries, event sinks
pub mod engine;

/// Engine configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{DuplicatePolicy, EngineConfig};
pub use engine::{BookEvent, EventSink, MatchResult, MatchingEngine, SharedEngine};
pub use error::{EngineError, OrderError};
pub use orderbook::{DepthLevel, OrderBook, PriceLevel};
pub use types::{Order, Side, Trade};
