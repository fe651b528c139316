//! Error types for order construction and submission.
//!
//! Every rejection is synchronous and happens before the book is touched,
//! so an `Err` from [`crate::MatchingEngine::submit`] always leaves the book
//! exactly as it was.

use thiserror::Error;

/// An order failed construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Identifiers are caller-assigned and must not be empty
    #[error("invalid order: identifier must not be empty")]
    EmptyIdentifier,

    /// Price is zero (or negative before fixed-point conversion)
    #[error("invalid order {id}: price must be positive")]
    NonPositivePrice { id: String },

    /// Quantity is zero
    #[error("invalid order {id}: quantity must be positive")]
    NonPositiveQuantity { id: String },

    /// Decimal price does not fit the fixed-point representation
    #[error("invalid order {id}: price out of range")]
    PriceOutOfRange { id: String },
}

/// A submission was rejected by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidOrder(#[from] OrderError),

    /// The identifier is already known to this engine
    #[error("duplicate order identifier: {0}")]
    DuplicateIdentifier(String),
}
