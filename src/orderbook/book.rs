//! Per-pair order book.
//!
//! ## Layout
//!
//! Each side is a plain `Vec<Order>` in submission order. No ordering holds
//! between matching runs; the matcher sorts both sides when it runs and
//! leaves them in whatever order that produced. Callers must not rely on
//! post-match ordering.
//!
//! ## Example
//!
//! ```
//! use pair_book::orderbook::OrderBook;
//! use pair_book::types::{maker_from_u64, Side};
//!
//! let mut book = OrderBook::new();
//! book.push_bid(1_000, 10, maker_from_u64(1));
//! book.push_ask(1_100, 15, maker_from_u64(2));
//!
//! assert_eq!(book.bid_count(), 1);
//! assert_eq!(book.best_ask(), Some(1_100));
//! assert!(!book.is_crossed());
//! assert_eq!(book.order(Side::Bid, 0).unwrap().amount, 10);
//! ```

use crate::error::BookError;
use crate::types::{Maker, Order, Side};

/// Bids and asks for a single trading pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    /// Buy orders, submission order until the next match
    bids: Vec<Order>,

    /// Sell orders, submission order until the next match
    asks: Vec<Order>,

    /// Sequence handed to the next submitted order (either side)
    next_sequence: u64,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book with `capacity` orders pre-allocated per side
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bids: Vec::with_capacity(capacity),
            asks: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Append a bid. Returns the sequence assigned to it.
    pub fn push_bid(&mut self, price: u128, amount: u64, maker: Maker) -> u64 {
        self.push(Side::Bid, price, amount, maker)
    }

    /// Append an ask. Returns the sequence assigned to it.
    pub fn push_ask(&mut self, price: u128, amount: u64, maker: Maker) -> u64 {
        self.push(Side::Ask, price, amount, maker)
    }

    /// Append a zero-filled order to `side`.
    pub fn push(&mut self, side: Side, price: u128, amount: u64, maker: Maker) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let order = Order::new(price, amount, maker, sequence);
        match side {
            Side::Bid => self.bids.push(order),
            Side::Ask => self.asks.push(order),
        }
        sequence
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Check if both sides are empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    // ========================================================================
    // Read access
    // ========================================================================

    #[inline]
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    #[inline]
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// All orders on one side
    #[inline]
    pub fn side(&self, side: Side) -> &[Order] {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    /// The order at `index` on `side`, in current storage order.
    pub fn order(&self, side: Side, index: usize) -> Result<&Order, BookError> {
        let orders = self.side(side);
        orders.get(index).ok_or(BookError::OrderIndexOutOfRange {
            side,
            index,
            len: orders.len(),
        })
    }

    /// Highest bid price. Scans, since sides are unsorted.
    pub fn best_bid(&self) -> Option<u128> {
        self.bids.iter().map(|o| o.price).max()
    }

    /// Lowest ask price. Scans, since sides are unsorted.
    pub fn best_ask(&self) -> Option<u128> {
        self.asks.iter().map(|o| o.price).min()
    }

    /// True when the best bid meets or exceeds the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }

    /// Unfilled quantity resting on one side
    pub fn open_quantity(&self, side: Side) -> u128 {
        self.side(side).iter().map(|o| u128::from(o.remaining())).sum()
    }

    // ========================================================================
    // Matching engine access
    // ========================================================================

    /// Both sides, mutably, for the matching engine
    #[inline]
    pub(crate) fn sides_mut(&mut self) -> (&mut Vec<Order>, &mut Vec<Order>) {
        (&mut self.bids, &mut self.asks)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
