//! Engine configuration.
//!
//! All fields have defaults, so a partial document (or none at all) is a
//! valid configuration:
//!
//! ```
//! use limit_order_book::config::{DuplicatePolicy, EngineConfig};
//!
//! let config = EngineConfig::default();
//! assert_eq!(config.duplicate_policy, DuplicatePolicy::RejectHistorical);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of order slots pre-allocated by the engine
pub const DEFAULT_ORDER_CAPACITY: usize = 1024;

/// How the engine treats an identifier it has seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Reject any identifier ever accepted by this engine, including ones
    /// whose orders have since been fully filled.
    ///
    /// Every filled identifier is remembered for the life of the engine, so
    /// memory grows with the number of distinct identifiers ever submitted.
    /// Use `RejectResting` for long-running books with unbounded id streams.
    #[default]
    RejectHistorical,
    /// Reject only identifiers that are currently resting; a fully filled
    /// identifier may be submitted again
    RejectResting,
}

/// Configuration for a [`crate::MatchingEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Order slots pre-allocated in the slab and identifier index
    pub order_capacity: usize,

    /// Duplicate identifier handling
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            order_capacity: DEFAULT_ORDER_CAPACITY,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Configuration with the given capacity and default policy
    pub fn with_capacity(order_capacity: usize) -> Self {
        Self {
            order_capacity,
            ..Self::default()
        }
    }

    /// Builder-style policy override
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
