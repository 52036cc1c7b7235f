//! Order types for the pair-book matching engine.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs for deterministic encoding.
//! SSZ encoding rules (ethereum.org):
//! - Basic types (u64, u128): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields
//!
//! The encoding feeds the state root computed after each matching batch.

use std::fmt;

use ssz_rs::prelude::*;

/// Opaque 32-byte identity of the account that submitted an order.
pub type Maker = [u8; 32];

/// Build a deterministic maker identity from an integer.
///
/// The integer is written big-endian into the last 8 bytes.
///
/// ```
/// use pair_book::types::maker_from_u64;
///
/// let maker = maker_from_u64(1);
/// assert_eq!(maker[31], 1);
/// assert!(maker[..31].iter().all(|b| *b == 0));
/// ```
pub fn maker_from_u64(n: u64) -> Maker {
    let mut maker = [0u8; 32];
    maker[24..].copy_from_slice(&n.to_be_bytes());
    maker
}

// ============================================================================
// Side enum
// ============================================================================

/// Book side: Bid (buy) or Ask (sell)
///
/// Represented as u8 for compact encoding:
/// - Bid = 0
/// - Ask = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order, matched against asks at or below its price
    #[default]
    Bid,
    /// Sell order, matched against bids at or above its price
    Ask,
}

impl Side {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Bid => 0,
            Side::Ask => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Bid),
            1 => Some(Side::Ask),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Ask => f.write_str("ask"),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order on one side of a book.
///
/// Everything except `filled_amount` is fixed at construction. The fill only
/// grows, and never past `amount`.
///
/// ## SSZ Layout
///
/// Fixed-size container of 16+8+8+32+8 = 72 bytes
/// (price + amount + filled_amount + maker + sequence).
///
/// ## Example
///
/// ```
/// use pair_book::types::{maker_from_u64, Order};
///
/// let mut order = Order::new(1_000, 10, maker_from_u64(1), 0);
/// assert_eq!(order.fill(4), 4);
/// assert_eq!(order.remaining(), 6);
/// assert!(!order.is_filled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Limit price (opaque unsigned integer)
    pub price: u128,

    /// Originally requested quantity
    pub amount: u64,

    /// Cumulative quantity already matched
    pub filled_amount: u64,

    /// Identity that submitted the order
    pub maker: Maker,

    /// Submission sequence within the owning book.
    /// Breaks ties between orders at the same price (earlier first).
    pub sequence: u64,
}

impl Order {
    /// Create a new, unfilled order
    pub fn new(price: u128, amount: u64, maker: Maker, sequence: u64) -> Self {
        Self {
            price,
            amount,
            filled_amount: 0,
            maker,
            sequence,
        }
    }

    /// Quantity still open for matching
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.amount.saturating_sub(self.filled_amount)
    }

    /// Check if the order is fully filled.
    ///
    /// Zero-amount orders are filled from the moment they are created.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled_amount == self.amount
    }

    /// Fill a portion of this order
    ///
    /// # Returns
    ///
    /// The actual quantity filled (may be less if the order doesn't have
    /// enough remaining)
    pub fn fill(&mut self, fill_qty: u64) -> u64 {
        let actual_fill = fill_qty.min(self.remaining());
        self.filled_amount += actual_fill;
        actual_fill
    }

    /// Maker identity as lowercase hex
    pub fn maker_hex(&self) -> String {
        hex::encode(self.maker)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
