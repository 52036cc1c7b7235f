//! Matching engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same book always produces the same fills
//! 2. **Synchronous Execution**: Every run completes without yielding
//! 3. **Price Priority**: Best price first, earliest submission among equals
//!
//! ## Matching Rules
//!
//! - **Bids** are walked highest price first
//! - **Asks** are walked lowest price first
//! - **Partial fills** are supported; residual quantity stays on the book
//! - **Fully filled** orders are removed at the end of the run
//!
//! ## Example
//!
//! ```
//! use pair_book::engine::match_book;
//! use pair_book::orderbook::OrderBook;
//! use pair_book::types::maker_from_u64;
//!
//! let mut book = OrderBook::new();
//! book.push_ask(800, 5, maker_from_u64(1));
//! book.push_bid(1_000, 10, maker_from_u64(2));
//!
//! let report = match_book(&mut book);
//!
//! assert_eq!(report.volume(), 5);
//! assert_eq!(book.ask_count(), 0);
//! assert_eq!(book.bids()[0].filled_amount, 5);
//! ```

pub mod matcher;

pub use matcher::{match_book, MatchingEngine};
