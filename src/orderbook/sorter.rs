//! Price-priority sorting over a side of the book.
//!
//! Book sides are kept in submission order and sorted only while matching.
//! Equal prices fall back to the submission sequence, so the earliest order
//! at a price always trades first and every run over the same book produces
//! the same fills.
//!
//! ## Example
//!
//! ```
//! use pair_book::orderbook::{sort_orders, SortDirection};
//! use pair_book::types::{maker_from_u64, Order};
//!
//! let mut orders = vec![
//!     Order::new(900, 1, maker_from_u64(1), 0),
//!     Order::new(1_100, 1, maker_from_u64(2), 1),
//!     Order::new(1_000, 1, maker_from_u64(3), 2),
//! ];
//!
//! sort_orders(&mut orders, SortDirection::Descending);
//! let prices: Vec<u128> = orders.iter().map(|o| o.price).collect();
//! assert_eq!(prices, vec![1_100, 1_000, 900]);
//! ```

use std::cmp::Ordering;

use crate::types::{Order, Side};

/// Direction to order prices in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Lowest price first (asks)
    Ascending,
    /// Highest price first (bids)
    Descending,
}

impl SortDirection {
    /// Priority direction for a book side: best price first
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Bid => SortDirection::Descending,
            Side::Ask => SortDirection::Ascending,
        }
    }

    /// Compare two orders under this direction.
    ///
    /// Sequence numbers are unique within a side, so this is a total order.
    #[inline]
    pub fn compare(self, a: &Order, b: &Order) -> Ordering {
        let by_price = match self {
            SortDirection::Ascending => a.price.cmp(&b.price),
            SortDirection::Descending => b.price.cmp(&a.price),
        };
        by_price.then_with(|| a.sequence.cmp(&b.sequence))
    }
}

impl From<bool> for SortDirection {
    fn from(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// Reorder `orders` in place by price priority.
///
/// Records move as a whole; fields are never mixed across orders. Empty and
/// single-element slices are left untouched.
pub fn sort_orders(orders: &mut [Order], direction: impl Into<SortDirection>) {
    let direction = direction.into();
    if orders.len() < 2 {
        return;
    }
    // Keys are unique, so the unstable sort is still deterministic
    orders.sort_unstable_by(|a, b| direction.compare(a, b));
}

/// Check whether `orders` is already in priority order
pub fn is_sorted_by_priority(orders: &[Order], direction: SortDirection) -> bool {
    orders
        .windows(2)
        .all(|pair| direction.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

// ============================================================================
// Unit Tests
// ============================================================================
