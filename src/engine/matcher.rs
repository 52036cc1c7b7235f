//! Batch matching over one order book.
//!
//! ## Algorithm
//!
//! 1. Sort asks ascending and bids descending (best price first, earliest
//!    submission first among equals).
//! 2. Walk both sides with cursors `i` (bids) and `j` (asks).
//! 3. While `bids[i].price >= asks[j].price`, match
//!    `min(bid remaining, ask remaining)` and advance whichever cursor now
//!    points at a fully filled order. At least one always does.
//! 4. Drop every fully filled order, keeping survivors in sorted order.
//!
//! Removal happens once, after the walk, so no cursor is ever invalidated.

use tracing::{debug, trace};

use crate::orderbook::{sort_orders, OrderBook, SortDirection};
use crate::types::{Fill, MatchReport};

/// Match crossing orders in `book` until no bid meets the best ask.
///
/// Fully filled orders are removed from their side. Partially filled orders
/// keep their place with `filled_amount` raised.
pub fn match_book(book: &mut OrderBook) -> MatchReport {
    let (bids, asks) = book.sides_mut();

    sort_orders(asks, SortDirection::Ascending);
    sort_orders(bids, SortDirection::Descending);

    let mut report = MatchReport::default();
    let (mut i, mut j) = (0, 0);

    while i < bids.len() && j < asks.len() {
        let (bid, ask) = (&mut bids[i], &mut asks[j]);
        if bid.price < ask.price {
            break;
        }

        let quantity = bid.remaining().min(ask.remaining());
        bid.fill(quantity);
        ask.fill(quantity);

        if quantity > 0 {
            trace!(
                bid_price = bid.price,
                ask_price = ask.price,
                quantity,
                bid_sequence = bid.sequence,
                ask_sequence = ask.sequence,
                "fill"
            );
            report.fills.push(Fill::between(bid, ask, quantity));
        }

        if bid.is_filled() {
            i += 1;
        }
        if ask.is_filled() {
            j += 1;
        }
    }

    let (bids_before, asks_before) = (bids.len(), asks.len());
    bids.retain(|o| !o.is_filled());
    asks.retain(|o| !o.is_filled());

    debug!(
        fills = report.fills.len(),
        volume = report.volume(),
        bids_removed = bids_before - bids.len(),
        asks_removed = asks_before - asks.len(),
        "book matched"
    );

    report
}

/// Stateful wrapper around [`match_book`] with running totals.
///
/// ## Example
///
/// ```
/// use pair_book::engine::MatchingEngine;
/// use pair_book::orderbook::OrderBook;
/// use pair_book::types::maker_from_u64;
///
/// let mut book = OrderBook::new();
/// book.push_ask(800, 5, maker_from_u64(1));
/// book.push_bid(800, 5, maker_from_u64(2));
///
/// let mut engine = MatchingEngine::new();
/// let report = engine.match_book(&mut book);
///
/// assert_eq!(report.volume(), 5);
/// assert!(book.is_empty());
/// assert_eq!(engine.total_volume(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    runs: u64,
    fills: u64,
    volume: u128,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the matching algorithm on one book and record its totals
    pub fn match_book(&mut self, book: &mut OrderBook) -> MatchReport {
        let report = match_book(book);

        // Running totals saturate instead of wrapping
        self.runs = self.runs.saturating_add(1);
        self.fills = self.fills.saturating_add(report.fills.len() as u64);
        self.volume = self.volume.saturating_add(report.volume());

        report
    }

    /// Books matched so far
    #[inline]
    pub fn total_runs(&self) -> u64 {
        self.runs
    }

    /// Fills produced so far
    #[inline]
    pub fn total_fills(&self) -> u64 {
        self.fills
    }

    /// Quantity matched so far
    #[inline]
    pub fn total_volume(&self) -> u128 {
        self.volume
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
