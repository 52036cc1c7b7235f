//! Fill records produced by the matching algorithm.

use crate::types::{Maker, Order};

/// A single match between a bid and an ask.
///
/// Both limit prices are recorded as-is. Choosing an execution price and
/// settling funds is left to the host.
///
/// ## Example
///
/// ```
/// use pair_book::types::{maker_from_u64, Fill, Order};
///
/// let bid = Order::new(1_000, 10, maker_from_u64(1), 0);
/// let ask = Order::new(800, 5, maker_from_u64(2), 0);
/// let fill = Fill::between(&bid, &ask, 5);
///
/// assert_eq!(fill.quantity, 5);
/// assert_eq!(fill.spread(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    /// Identity behind the bid
    pub bid_maker: Maker,

    /// Identity behind the ask
    pub ask_maker: Maker,

    /// Bid limit price
    pub bid_price: u128,

    /// Ask limit price (always <= bid_price)
    pub ask_price: u128,

    /// Quantity matched
    pub quantity: u64,

    /// Submission sequence of the bid within its book
    pub bid_sequence: u64,

    /// Submission sequence of the ask within its book
    pub ask_sequence: u64,
}

impl Fill {
    /// Record a match of `quantity` between two orders.
    pub fn between(bid: &Order, ask: &Order, quantity: u64) -> Self {
        Self {
            bid_maker: bid.maker,
            ask_maker: ask.maker,
            bid_price: bid.price,
            ask_price: ask.price,
            quantity,
            bid_sequence: bid.sequence,
            ask_sequence: ask.sequence,
        }
    }

    /// Price improvement available between the two limits
    pub fn spread(&self) -> u128 {
        self.bid_price.saturating_sub(self.ask_price)
    }
}

/// Everything one matching run over a single book produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Fills in the order they happened
    pub fills: Vec<Fill>,
}

impl MatchReport {
    /// Total quantity matched, counted once per fill.
    ///
    /// Widened to `u128`: a single run may match more than `u64::MAX` in total.
    pub fn volume(&self) -> u128 {
        self.fills.iter().map(|f| u128::from(f.quantity)).sum()
    }

    /// True when nothing crossed
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
