//! Receipt summarizing one batch matching pass over every pair.
//!
//! The receipt carries a state root over the resting orders left behind,
//! so two hosts replaying the same submissions can compare books cheaply.

use ssz_rs::prelude::*;
use sha2::{Digest, Sha256};

/// Summary of a `match_all` batch.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash over the SSZ encoding of every
/// resting order, walked in ascending pair-id order, bids before asks.
///
/// ## Example
///
/// ```
/// use pair_book::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(
///     1,          // batch_id
///     2,          // pairs_matched
///     3,          // fills_executed
///     25,         // volume
///     [0u8; 32],  // state_root (would be computed)
/// );
/// assert!(!receipt.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Batch sequence number, starting at 1
    pub batch_id: u64,

    /// Number of pairs visited
    pub pairs_matched: u64,

    /// Number of fills across all pairs
    pub fills_executed: u64,

    /// Sum of matched quantity across all pairs
    pub volume: u128,

    /// State root after matching (SHA-256 hash, 32 bytes)
    pub state_root: [u8; 32],
}

impl MatchReceipt {
    pub fn new(
        batch_id: u64,
        pairs_matched: u64,
        fills_executed: u64,
        volume: u128,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            batch_id,
            pairs_matched,
            fills_executed,
            volume,
            state_root,
        }
    }

    /// Compute SHA-256 hash of the given data
    ///
    /// Returns a 32-byte array suitable for use as a state root.
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// True if the batch produced no fills
    pub fn is_empty(&self) -> bool {
        self.fills_executed == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
