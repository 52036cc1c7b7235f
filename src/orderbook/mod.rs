//! Order books and the pair registry.
//!
//! ## Components
//!
//! - [`sort_orders`]: Price-priority sort over one side
//! - [`OrderBook`]: Unsorted bids and asks for a single pair
//! - [`OrderBookRegistry`]: Pair id to pair metadata and book
//!
//! ## Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Create pair | O(1) |
//! | Submit order | O(1) amortized |
//! | Match pair | O(n log n) |
//! | Best bid/ask | O(n) |
//!
//! Sides are not kept sorted between runs, so every match sorts again.

pub mod sorter;
pub mod book;
pub mod registry;

pub use sorter::{is_sorted_by_priority, sort_orders, SortDirection};
pub use book::OrderBook;
pub use registry::OrderBookRegistry;
