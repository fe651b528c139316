//! Order book storage for the matching engine.
//!
//! ## Architecture
//!
//! - **Slab-based storage**: O(1) order insertion, removal, and lookup
//! - **Price levels**: Orders grouped by price using BTreeMap
//! - **Price-time priority**: FIFO ordering at each price level
//!
//! ## Components
//!
//! - [`OrderNode`]: Wrapper around `Order` with linked-list pointers for price level
//! - [`PriceLevel`]: Collection of orders at a single price point
//! - [`BookSide`]: Price levels of one side, best-first
//! - [`OrderBook`]: Both sides plus the identifier index
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Rest order | O(log n) |
//! | Lookup by ID | O(1) |
//! | Best bid/ask | O(log n) |
//! | Fill head of best level | O(log n) |

pub mod node;
pub mod level;
pub mod side;
pub mod book;

pub use node::OrderNode;
pub use level::{LevelIter, PriceLevel};
pub use side::{BookSide, DepthLevel};
pub use book::OrderBook;
