//! Error types for order book and registry operations.

use thiserror::Error;

use crate::types::{PairId, Side};

/// Errors reported by the registry and order books.
///
/// Every error is returned synchronously to the caller. Nothing is retried
/// internally and no operation leaves a partially applied mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// No trading pair has been registered under this id.
    #[error("trading pair {0} not found")]
    PairNotFound(PairId),

    /// Indexed access past the end of one side of a book.
    #[error("no {side} order at index {index} (side holds {len} orders)")]
    OrderIndexOutOfRange { side: Side, index: usize, len: usize },

    /// Submission rejected by the engine's validation policy.
    #[error("invalid order: {reason}")]
    InvalidOrder { reason: &'static str },

    /// A resting order could not be SSZ-encoded for the state root.
    #[error("failed to encode order {sequence} of pair {pair_id}: {message}")]
    Encoding { pair_id: PairId, sequence: u64, message: String },
}
